//! End-to-end tests for the import pipeline.

use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;
use vistoria_ingest::IngestError;
use vistoria_model::{CanonicalField, Delimiter, Postura, Status, Summary};
use vistoria_validate::{
    EMPTY_FILE_MESSAGE, ImportConfig, import_bytes, validate_bytes, validate_file, validate_text,
};

const THREE_ROWS: &str = "\
Nº Demanda,Nº SEI,Postura,SQL,Data da Vistoria,Endereço,Status,Observações
2024-001,6011.2024/0001-1,Obras,012.345.0678-9,05/03/2024,\"Rua Augusta, 100\",Ação necessária,
,6011.2024/0002-2,Limpeza,,06/03/2024,Rua B,Auto emitido,sem número
2024-003,,MPL,,2024-03-07,,Arquivado,\"nota \"\"urgente\"\"\"
";

#[test]
fn three_row_scenario() {
    let result = validate_text(THREE_ROWS);

    assert_eq!(result.summary, Summary { total: 3, valid: 1, errors: 2 });
    assert_eq!(result.valid_rows.len(), 1);
    assert_eq!(result.invalid_rows.len(), 2);
    assert!(!result.is_valid);
    assert!(result.warnings.is_empty());
    assert_eq!(result.delimiter, Delimiter::Comma);

    let record = &result.valid_rows[0];
    assert_eq!(record.numero_demanda, "2024-001");
    assert_eq!(record.postura, Postura::Obras);
    assert_eq!(record.data_vistoria, "2024-03-05");
    assert_eq!(record.endereco.as_deref(), Some("Rua Augusta, 100"));
    assert_eq!(record.status, Status::AcaoNecessaria);
    assert_eq!(record.observacoes, None);

    let second = &result.invalid_rows[0];
    assert_eq!(second.row, 3);
    assert_eq!(second.issues.len(), 1);
    assert_eq!(second.issues[0].field, "Nº Demanda");
    assert_eq!(second.issues[0].message, "required field");

    let third = &result.invalid_rows[1];
    assert_eq!(third.row, 4);
    assert_eq!(third.issues.len(), 1);
    assert_eq!(third.issues[0].field, "Status");
    assert!(third.issues[0].message.starts_with("invalid value, expected one of:"));
    assert_eq!(third.issues[0].value.as_deref(), Some("Arquivado"));
    assert_eq!(third.raw_fields[7], "nota \"urgente\"");

    assert_eq!(result.errors.len(), 2);
}

#[test]
fn pipeline_is_idempotent() {
    assert_eq!(validate_text(THREE_ROWS), validate_text(THREE_ROWS));
    let bytes = THREE_ROWS.as_bytes();
    assert_eq!(
        validate_bytes(bytes, None).unwrap(),
        validate_bytes(bytes, None).unwrap()
    );
}

#[test]
fn header_only_is_fatal() {
    for text in ["", "\n\n", "Nº Demanda,Status\n", " , \nNº Demanda\n"] {
        let result = validate_text(text);
        assert_eq!(result.summary, Summary { total: 0, valid: 0, errors: 1 });
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].row, 0);
        assert_eq!(result.errors[0].field, "file");
        assert_eq!(result.errors[0].message, EMPTY_FILE_MESSAGE);
        assert!(result.columns.is_empty());
        assert!(!result.is_valid);
    }
}

#[test]
fn missing_required_columns_warn_but_rows_still_checked() {
    let result = validate_text("Demanda;Status\n1;Auto emitido\n");
    assert_eq!(result.warnings.len(), 1);
    let warning = &result.warnings[0];
    assert_eq!(warning.row, 0);
    assert_eq!(warning.field, "columns");
    assert!(warning.message.contains("data_vistoria, postura"));
    assert_eq!(result.summary.errors, 1);
}

#[test]
fn semicolon_latin1_export() {
    let bytes = b"N\xBA Demanda;Data Vistoria;Postura;Situa\xE7\xE3o\r\n\
                  77;1/2/2024;\xC1rea P\xFAblica;Demanda conclu\xEDda\r\n";
    let result = validate_bytes(bytes, None).unwrap();
    assert_eq!(result.encoding.as_deref(), Some("windows-1252"));
    assert_eq!(result.delimiter, Delimiter::Semicolon);
    assert_eq!(result.columns.index_of(CanonicalField::Status), Some(3));
    assert_eq!(result.summary.valid, 1);
    let record = &result.valid_rows[0];
    assert_eq!(record.data_vistoria, "2024-02-01");
    assert_eq!(record.postura, Postura::AreaPublica);
    assert_eq!(record.status, Status::DemandaConcluida);
}

#[test]
fn unknown_encoding_label_is_an_error() {
    let err = validate_bytes(b"a,b", Some("klingon")).unwrap_err();
    assert!(matches!(err, IngestError::UnknownEncoding { .. }));
}

#[test]
fn validates_file_from_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("vistorias.csv");
    fs::write(&path, THREE_ROWS).expect("write csv");
    let result = validate_file(&path, Some("utf-8")).expect("validate file");
    assert_eq!(result.summary.total, 3);
    assert_eq!(result.encoding.as_deref(), Some("UTF-8"));

    let missing = validate_file(&dir.path().join("missing.csv"), None);
    assert!(matches!(missing, Err(IngestError::FileNotFound { .. })));
}

#[test]
fn config_aliases_reach_column_mapping() {
    let config: ImportConfig = "[aliases]\nnumero_demanda = [\"Protocolo\"]".parse().unwrap();
    let options = config.options().unwrap();
    let text = "Protocolo,Data,Postura,Status\n9,01/01/2024,POP,Auto emitido\n";
    let result = import_bytes(text.as_bytes(), &options);
    assert_eq!(result.summary.valid, 1);
    assert_eq!(result.valid_rows[0].numero_demanda, "9");
}

#[test]
fn result_json_shape() {
    let result = validate_text(THREE_ROWS);
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["delimiter"], "comma");
    assert_eq!(json["columns"][0]["mapped_to"], "numero_demanda");
    assert_eq!(json["valid_rows"][0]["status"], "Ação necessária");
    assert_eq!(json["invalid_rows"][1]["issues"][0]["field"], "Status");
    assert!(json.get("encoding").is_none());
}

fn arb_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("OBRAS".to_string()),
        Just("Auto emitido".to_string()),
        Just("05/03/2024".to_string()),
        "[a-z0-9 ]{1,10}",
    ]
}

proptest! {
    #[test]
    fn summary_counts_every_data_row(
        rows in prop::collection::vec(prop::collection::vec(arb_cell(), 4), 1..20)
    ) {
        let mut text = String::from("Nº Demanda,Data Vistoria,Postura,Status\n");
        for row in &rows {
            text.push_str(&row.join(","));
            text.push('\n');
        }
        let kept = rows
            .iter()
            .filter(|row| row.iter().any(|cell| !cell.trim().is_empty()))
            .count();

        let result = validate_text(&text);
        if kept == 0 {
            prop_assert_eq!(result.summary.errors, 1);
            prop_assert_eq!(result.summary.total, 0);
        } else {
            prop_assert_eq!(result.summary.total, kept);
            prop_assert_eq!(result.summary.valid + result.summary.errors, kept);
            prop_assert!(result.invalid_rows.iter().all(|row| !row.issues.is_empty()));
            prop_assert_eq!(
                result.errors.len(),
                result.invalid_rows.iter().map(|row| row.issues.len()).sum::<usize>()
            );
        }
    }
}
