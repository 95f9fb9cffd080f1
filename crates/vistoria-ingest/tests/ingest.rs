use std::fs;

use proptest::prelude::*;
use tempfile::TempDir;
use vistoria_ingest::{
    EncodingHint, IngestError, check_file_size_with_limit, load_file, tokenize, tokenize_with,
};
use vistoria_model::Delimiter;

fn write_temp(dir: &TempDir, name: &str, contents: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn loads_utf8_file_and_tokenizes() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_temp(
        &dir,
        "vistorias.csv",
        "\u{FEFF}Nº Demanda;Endereço;Status\r\n101;Rua Três, 5;Ação necessária\r\n".as_bytes(),
    );

    let decoded = load_file(&path, EncodingHint::Auto).expect("load file");
    assert!(!decoded.fell_back);
    let table = tokenize(&decoded.text);
    assert_eq!(table.delimiter, Delimiter::Semicolon);
    assert_eq!(table.header().expect("header")[1], "Endereço");
    assert_eq!(
        table.data_rows()[0],
        vec!["101", "Rua Três, 5", "Ação necessária"]
    );
}

#[test]
fn loads_latin1_file_with_fallback() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_temp(
        &dir,
        "latin1.csv",
        b"Situa\xE7\xE3o,Observa\xE7\xF5es\nDemanda conclu\xEDda,ok\n",
    );

    let decoded = load_file(&path, EncodingHint::Auto).expect("load file");
    assert!(decoded.fell_back);
    assert_eq!(decoded.encoding_name(), "windows-1252");
    let table = tokenize(&decoded.text);
    assert_eq!(table.rows[0], vec!["Situação", "Observações"]);
    assert_eq!(table.rows[1], vec!["Demanda concluída", "ok"]);
}

#[test]
fn missing_file_is_reported_with_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("nope.csv");
    let err = load_file(&path, EncodingHint::Auto).unwrap_err();
    match err {
        IngestError::FileNotFound { path: reported } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn oversized_file_is_rejected() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_temp(&dir, "big.csv", &[b'a'; 64]);
    assert!(check_file_size_with_limit(&path, 64).is_ok());
    assert!(matches!(
        check_file_size_with_limit(&path, 10),
        Err(IngestError::FileTooLarge { size: 64, .. })
    ));
}

#[test]
fn quoted_row_from_export() {
    let table = tokenize("Demanda,Obs\n\"1\",\"\"\"quoted\"\"text\"");
    assert_eq!(table.data_rows()[0], vec!["1", "\"quoted\"text"]);
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

proptest! {
    #[test]
    fn plain_fields_survive_tokenization(
        rows in prop::collection::vec(prop::collection::vec("[a-zA-Z0-9]{1,8}", 3), 1..6)
    ) {
        let text = rows
            .iter()
            .map(|row| row.join(";"))
            .collect::<Vec<_>>()
            .join("\n");
        let table = tokenize(&text);
        prop_assert_eq!(table.delimiter, Delimiter::Semicolon);
        prop_assert_eq!(table.rows, rows);
    }

    #[test]
    fn quoted_fields_survive_tokenization(
        rows in prop::collection::vec(
            prop::collection::vec("[a-z0-9][a-z0-9;,\"\n ]{0,10}[a-z0-9]", 2),
            1..5,
        )
    ) {
        let text = rows
            .iter()
            .map(|row| row.iter().map(|f| quote(f)).collect::<Vec<_>>().join(","))
            .collect::<Vec<_>>()
            .join("\r\n");
        let table = tokenize_with(&text, Delimiter::Comma);
        prop_assert_eq!(table.rows, rows);
    }

    #[test]
    fn tokenized_rows_are_never_blank(text in "[a-c,;\"\n\r ]{0,40}") {
        let table = tokenize(&text);
        for row in &table.rows {
            prop_assert!(row.iter().any(|field| !field.is_empty()));
            prop_assert!(row.iter().all(|field| field.trim() == field));
        }
    }
}
