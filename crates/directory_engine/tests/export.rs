use directory_core::BusinessRecord;
use directory_engine::write_csv;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn record(name: &str, phone: &str) -> BusinessRecord {
    BusinessRecord {
        name: name.to_string(),
        phone: phone.to_string(),
        ..BusinessRecord::default()
    }
}

#[test]
fn zero_records_create_no_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.csv");

    let written = write_csv(&path, &[]).unwrap();

    assert_eq!(written, None);
    assert!(!path.exists());
}

#[test]
fn output_starts_with_utf8_bom_and_header() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.csv");

    let written = write_csv(&path, &[record("Acme", "912 345 678")]).unwrap();
    assert_eq!(written.as_deref(), Some(path.as_path()));

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");

    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let header = text.lines().next().unwrap();
    assert_eq!(
        header,
        "Name,Activity,Province,Address,PostalCode,City,Phone,Website"
    );
}

#[test]
fn rows_follow_accumulation_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.csv");

    let records = vec![record("First", "1"), record("Second", "2")];
    write_csv(&path, &records).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "First,N/A,N/A,N/A,N/A,N/A,1,N/A");
    assert_eq!(lines[2], "Second,N/A,N/A,N/A,N/A,N/A,2,N/A");
}

#[test]
fn existing_file_is_replaced() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("out.csv");

    write_csv(&path, &[record("Old", "1")]).unwrap();
    write_csv(&path, &[record("New", "2")]).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert!(text.contains("New"));
    assert!(!text.contains("Old"));
}
