#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use flate2::Compression;
use flate2::write::GzEncoder;
use serde_json::{Value, json};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

pub const HISTORY_DIR: &str = "Spotify Extended Streaming History";

pub fn hfy() -> Command {
    cargo_bin_cmd!("hiasify")
}

/// Like `hfy()` but pointed at a config path that does not exist,
/// so the user's own configuration never leaks into a test.
pub fn hfy_clean(name: &str) -> Command {
    let mut cmd = hfy();
    cmd.args(["--config", &temp_out(&format!("{name}_none"), "conf")]);
    cmd
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hiasify.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// One play object with the keys Spotify exports (plus some noise keys).
pub fn play(ts: &str, ms: u64, track: Option<&str>, artist: &str, album: &str) -> Value {
    json!({
        "ts": ts,
        "platform": "android",
        "ms_played": ms,
        "conn_country": "DE",
        "ip_addr": "10.0.0.1",
        "master_metadata_track_name": track,
        "master_metadata_album_artist_name": artist,
        "master_metadata_album_album_name": album,
        "spotify_track_uri": "spotify:track:xyz",
        "episode_name": null,
        "reason_start": "trackdone",
        "reason_end": "trackdone",
        "shuffle": false,
        "skipped": false,
        "offline": false,
        "incognito_mode": false
    })
}

pub fn entry(plays: &[Value]) -> String {
    serde_json::to_string(&Value::Array(plays.to_vec())).expect("serialize plays")
}

/// Write a zip archive with the given (name, content) entries.
pub fn write_zip(name: &str, entries: &[(&str, String)]) -> String {
    let path = temp_out(name, "zip");
    let file = fs::File::create(&path).expect("create zip");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for (entry_name, content) in entries {
        zip.start_file(*entry_name, options).expect("start file");
        zip.write_all(content.as_bytes()).expect("write entry");
    }
    zip.finish().expect("finish zip");
    path
}

/// Same as `write_zip`, as a gzip-compressed tar.
pub fn write_tar_gz(name: &str, entries: &[(&str, String)]) -> String {
    let path = temp_out(name, "tar.gz");
    let file = fs::File::create(&path).expect("create tar.gz");
    let mut tar = tar::Builder::new(GzEncoder::new(file, Compression::default()));

    for (entry_name, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        tar.append_data(&mut header, entry_name, content.as_bytes())
            .expect("append entry");
    }
    tar.into_inner()
        .expect("finish tar")
        .finish()
        .expect("finish gzip");
    path
}

pub fn history_entry(file: &str) -> String {
    format!("{HISTORY_DIR}/{file}")
}

/// Archive used by most CLI tests:
/// - 2023: Artist X "Song A" ×3, Artist Y "Song B" ×1
/// - 2024: Artist Y "Song B" ×2, Beyoncé "Halo" ×1
/// - noise: one skip, one podcast (no track), one duplicate
pub fn sample_archive(name: &str) -> String {
    let first = entry(&[
        play("2023-01-05T08:00:00Z", 3_600_000, Some("Song A"), "Artist X", "Album 1"),
        play("2023-02-05T08:00:00Z", 1_800_000, Some("Song A"), "Artist X", "Album 1"),
        play("2023-03-05T08:00:00Z", 900_000, Some("Song A"), "Artist X", "Album 1"),
        play("2023-04-05T08:00:00Z", 240_000, Some("Song B"), "Artist Y", "Album 2"),
        play("2023-04-06T08:00:00Z", 30_000, Some("Short"), "Artist Y", "Album 2"),
    ]);
    let second = entry(&[
        play("2024-05-01T10:00:00Z", 200_000, Some("Song B"), "Artist Y", "Album 2"),
        play("2024-05-01T10:00:00Z", 200_000, Some("Song B"), "Artist Y", "Album 2"),
        play("2024-06-01T10:00:00Z", 200_000, Some("Song B"), "Artist Y", "Album 2"),
        play("2024-07-01T10:00:00Z", 260_000, Some("Halo"), "Beyoncé", "I Am... Sasha Fierce"),
        play("2024-07-02T10:00:00Z", 1_200_000, None, "", ""),
    ]);

    write_zip(
        name,
        &[
            (history_entry("Streaming_History_Audio_2023_0.json").as_str(), first),
            (history_entry("Streaming_History_Audio_2024_1.json").as_str(), second),
            (history_entry("Streaming_History_Video_2024.json").as_str(), "[]".to_string()),
            (history_entry("ReadMeFirst_ExtendedStreamingHistory.pdf").as_str(), "pdf".to_string()),
        ],
    )
}
