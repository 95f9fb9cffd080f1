use tempfile::TempDir;
use vistoria_model::{ParsedRecord, Postura, RecordFilter, Status};
use vistoria_output::{UTF8_BOM, export_csv, write_csv};
use vistoria_validate::{validate_bytes, validate_file};

fn records() -> Vec<ParsedRecord> {
    vec![
        ParsedRecord {
            numero_demanda: "2024-001".to_string(),
            numero_sei: Some("6011.2024/0001-1".to_string()),
            postura: Postura::FaltaDeAflr,
            sql_numero: Some("012.345.0678-9".to_string()),
            data_vistoria: "2024-03-05".to_string(),
            endereco: Some("Av. Paulista, 1000; sala 2".to_string()),
            status: Status::ArDevolvido,
            observacoes: Some("disse \"volte amanhã\"".to_string()),
        },
        ParsedRecord {
            numero_demanda: "2024-002".to_string(),
            numero_sei: None,
            postura: Postura::Comgas,
            sql_numero: None,
            data_vistoria: "2023-12-31".to_string(),
            endereco: None,
            status: Status::AcaoNecessaria,
            observacoes: None,
        },
        ParsedRecord {
            numero_demanda: "2024-003".to_string(),
            numero_sei: None,
            postura: Postura::ManejoArboreo,
            sql_numero: None,
            data_vistoria: "2024-01-15".to_string(),
            endereco: Some("Rua Três".to_string()),
            status: Status::DemandaConcluida,
            observacoes: Some("poda\nurgente".to_string()),
        },
    ]
}

#[test]
fn export_then_import_preserves_records() {
    let original = records();
    let bytes = export_csv(&original).expect("export");
    assert!(bytes.starts_with(UTF8_BOM));
    assert!(!bytes.ends_with(b"\n"));

    let result = validate_bytes(&bytes, None).expect("import");
    assert!(result.is_valid);
    assert!(result.warnings.is_empty());
    assert_eq!(result.summary.valid, original.len());
    assert_eq!(result.valid_rows, original);
}

#[test]
fn write_filtered_export_to_disk() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("export.csv");
    let filter = RecordFilter::new().with_search("RUA TRÊS");
    let kept: Vec<ParsedRecord> = filter.apply(&records()).into_iter().cloned().collect();
    assert_eq!(kept.len(), 1);

    write_csv(&path, &kept).expect("write");
    let result = validate_file(&path, None).expect("import");
    assert_eq!(result.valid_rows, kept);
}
