mod common;
use common::{hfy_clean, sample_archive, temp_out};
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::io::Read;

fn sheet_xml(path: &str) -> String {
    let file = fs::File::open(path).expect("open xlsx");
    let mut zip = zip::ZipArchive::new(file).expect("xlsx is a zip");
    let mut xml = String::new();
    zip.by_name("xl/worksheets/sheet1.xml")
        .expect("first sheet")
        .read_to_string(&mut xml)
        .expect("read sheet xml");
    xml
}

/// The `<c r="..">...</c>` element of one cell.
fn cell_xml<'a>(sheet: &'a str, cell: &str) -> &'a str {
    let start = sheet
        .find(&format!("<c r=\"{cell}\""))
        .unwrap_or_else(|| panic!("cell {cell} missing"));
    let len = sheet[start..].find("</c>").expect("closed cell") + "</c>".len();
    &sheet[start..start + len]
}

#[test]
fn test_export_tracks_csv() {
    let archive = sample_archive("export_tracks_csv");
    let out = temp_out("export_tracks_csv", "csv");

    hfy_clean("export_tracks_csv")
        .args(["export", &archive, "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed (3 rows)"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("track,anzahl,hours_played"));
    assert_eq!(lines.next(), Some("Artist X - Song A,3,1.75"));
    assert!(content.contains("Beyoncé - Halo,1,0.07"));
}

#[test]
fn test_export_albums_csv_header() {
    let archive = sample_archive("export_albums_csv");
    let out = temp_out("export_albums_csv", "csv");

    hfy_clean("export_albums_csv")
        .args(["export", &archive, "--file", &out, "--view", "albums"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("album,#,hours_played"));
    assert!(content.contains("Artist X - Album 1,3,1.75"));
}

#[test]
fn test_export_artists_json_with_search() {
    let archive = sample_archive("export_artists_json");
    let out = temp_out("export_artists_json", "json");

    hfy_clean("export_artists_json")
        .args([
            "export", &archive, "--format", "json", "--file", &out, "--view", "artists",
            "--search", "artist",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["artist"], "Artist X");
    assert_eq!(rows[0]["anzahl"], 3);
    assert_eq!(rows[0]["hours_played"], 1.75);
    assert_eq!(rows[1]["artist"], "Artist Y");
}

#[test]
fn test_export_wrapped_json_year() {
    let archive = sample_archive("export_wrapped_json");
    let out = temp_out("export_wrapped_json", "json");

    hfy_clean("export_wrapped_json")
        .args([
            "export", &archive, "--format", "json", "--file", &out, "--view",
            "wrapped-tracks", "--year", "2024",
        ])
        .assert()
        .success();

    let rows: Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read json")).expect("valid json");
    let rows = rows.as_array().expect("array of rows");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["track"], "Artist Y - Song B");
    assert_eq!(rows[0]["anzahl"], 2);
    assert_eq!(rows[1]["track"], "Beyoncé - Halo");
}

#[test]
fn test_export_plays_csv() {
    let archive = sample_archive("export_plays_csv");
    let out = temp_out("export_plays_csv", "csv");

    hfy_clean("export_plays_csv")
        .args(["export", &archive, "--file", &out, "--view", "plays"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("time,hours_played,track,artist,album,reason_end"));
    // header + 7 retained plays
    assert_eq!(content.lines().count(), 8);
    assert!(content.contains("2023-01-05T08:00:00+00:00,1.0,Song A,Artist X,Album 1,trackdone"));
}

#[test]
fn test_export_xlsx_and_pdf_written() {
    let archive = sample_archive("export_binary");

    let xlsx = temp_out("export_binary", "xlsx");
    hfy_clean("export_binary")
        .args(["export", &archive, "--format", "xlsx", "--file", &xlsx])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));
    let bytes = fs::read(&xlsx).expect("xlsx written");
    assert!(bytes.starts_with(b"PK"));

    // count and hours of "Artist X - Song A" are stored as numbers
    let sheet = sheet_xml(&xlsx);
    for (cell, value) in [("B2", "<v>3</v>"), ("C2", "<v>1.75</v>")] {
        let xml = cell_xml(&sheet, cell);
        assert!(xml.contains(value), "{cell}: {xml}");
        assert!(!xml.contains("t=\"s\""), "{cell} is a string: {xml}");
    }
    assert!(cell_xml(&sheet, "A2").contains("t=\"s\""));

    let pdf = temp_out("export_binary", "pdf");
    hfy_clean("export_binary")
        .args([
            "export", &archive, "--format", "pdf", "--file", &pdf, "--view", "wrapped-artists",
            "--year", "2023",
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));
    let bytes = fs::read(&pdf).expect("pdf written");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_empty_view_still_writes_header() {
    let archive = sample_archive("export_empty_view");
    let out = temp_out("export_empty_view", "csv");

    hfy_clean("export_empty_view")
        .args(["export", &archive, "--file", &out, "--search", "nothing like this"])
        .assert()
        .success()
        .stdout(contains("No rows for the selected view."));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content.trim_end(), "track,anzahl,hours_played");
}

#[test]
fn test_export_relative_path_fails() {
    let archive = sample_archive("export_relative");

    hfy_clean("export_relative")
        .args(["export", &archive, "--file", "relative/out.csv"])
        .assert()
        .failure()
        .stderr(contains("output file path must be absolute"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let archive = sample_archive("export_force");
    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("write existing file");

    hfy_clean("export_force")
        .args(["export", &archive, "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "old content");

    hfy_clean("export_force")
        .args(["export", &archive, "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").starts_with("track,"));
}
