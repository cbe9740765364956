//! Integration tests for checkpoint-file decoding.

use std::fs;
use std::io::Cursor;

use crackctl::restore::{
    restore_path, PointerWidth, RestoreDecoder, RestoreError, CWD_LEN, PLACEHOLDER_BINARY,
};

struct Record {
    version: u32,
    cwd: &'static str,
    pid: u32,
    dict_pos: u32,
    mask_pos: u32,
    pw_cur: u64,
    argc: u32,
    argv_ptr: u64,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            version: 120,
            cwd: "/opt/engine",
            pid: 4242,
            dict_pos: 3,
            mask_pos: 1,
            pw_cur: 9_876_543_210,
            argc: 6,
            argv_ptr: 0x7fff_1234_5678,
        }
    }
}

impl Record {
    fn encode(&self, width: PointerWidth, tail: &str) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&self.version.to_le_bytes());
        let mut cwd = [0u8; CWD_LEN];
        cwd[..self.cwd.len()].copy_from_slice(self.cwd.as_bytes());
        out.extend_from_slice(&cwd);
        out.extend_from_slice(&self.pid.to_le_bytes());
        out.extend_from_slice(&self.dict_pos.to_le_bytes());
        out.extend_from_slice(&self.mask_pos.to_le_bytes());
        out.extend_from_slice(&self.pw_cur.to_le_bytes());
        out.extend_from_slice(&self.argc.to_le_bytes());
        match width {
            PointerWidth::Four => out.extend_from_slice(&(self.argv_ptr as u32).to_le_bytes()),
            PointerWidth::Eight => {
                out.extend_from_slice(&[0u8; 4]);
                out.extend_from_slice(&self.argv_ptr.to_le_bytes());
            }
        }
        out.extend_from_slice(tail.as_bytes());
        out
    }
}

const TAIL: &str = "\u{7}\u{1}/usr/local/bin/oclHashcat64.bin\n-m\n0\n-a\n0\nhashes.txt\n";

#[test]
fn eight_byte_record_decodes_exact_fields() {
    let decoder = RestoreDecoder::new(PointerWidth::Eight);
    let bytes = Record::default().encode(PointerWidth::Eight, TAIL);
    assert_eq!(bytes.len(), decoder.record_len() + TAIL.len());

    let snapshot = decoder.decode(Cursor::new(bytes)).unwrap();
    assert_eq!(snapshot.version, 120);
    assert_eq!(snapshot.cwd, "/opt/engine");
    assert_eq!(snapshot.pid, 4242);
    assert_eq!(snapshot.dict_pos, 3);
    assert_eq!(snapshot.mask_pos, 1);
    assert_eq!(snapshot.pw_cur, 9_876_543_210);
    assert_eq!(snapshot.argc, 6);
    assert_eq!(snapshot.argv_ptr, 0x7fff_1234_5678);
    assert_eq!(
        snapshot.argv,
        vec!["oclHashcat64.bin", "-m", "0", "-a", "0", "hashes.txt"]
    );
}

#[test]
fn four_byte_record_decodes_exact_fields() {
    let record = Record {
        argv_ptr: 0xdead_beef,
        ..Record::default()
    };
    let decoder = RestoreDecoder::new(PointerWidth::Four);
    let bytes = record.encode(PointerWidth::Four, TAIL);
    assert_eq!(bytes.len(), decoder.record_len() + TAIL.len());

    let snapshot = decoder.decode(Cursor::new(bytes)).unwrap();
    assert_eq!(snapshot.pid, 4242);
    assert_eq!(snapshot.argv_ptr, 0xdead_beef);
    assert_eq!(snapshot.argv[0], "oclHashcat64.bin");
}

#[test]
fn first_line_without_binary_name_gets_placeholder() {
    let decoder = RestoreDecoder::new(PointerWidth::Eight);
    let bytes = Record::default().encode(PointerWidth::Eight, "garbage\n-m\n0\n");
    let snapshot = decoder.decode(Cursor::new(bytes)).unwrap();
    assert_eq!(snapshot.argv, vec![PLACEHOLDER_BINARY, "-m", "0"]);
}

#[test]
fn record_without_tail_has_no_arguments() {
    let decoder = RestoreDecoder::new(PointerWidth::Eight);
    let bytes = Record::default().encode(PointerWidth::Eight, "");
    let snapshot = decoder.decode(Cursor::new(bytes)).unwrap();
    assert!(snapshot.argv.is_empty());
}

#[test]
fn truncated_record_is_an_error() {
    let decoder = RestoreDecoder::new(PointerWidth::Eight);
    let mut bytes = Record::default().encode(PointerWidth::Eight, "");
    bytes.truncate(270);

    let err = decoder.decode(Cursor::new(bytes)).unwrap_err();
    assert!(matches!(err, RestoreError::Truncated { field: "maskpos" }));
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.restore");
    let err = RestoreDecoder::default().read(&path).unwrap_err();
    assert!(matches!(err, RestoreError::NotFound { .. }));
}

#[test]
fn reads_checkpoint_from_session_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = restore_path(dir.path(), "nightly");
    assert_eq!(path, dir.path().join("nightly.restore"));
    fs::write(&path, Record::default().encode(PointerWidth::Eight, TAIL)).unwrap();

    let snapshot = RestoreDecoder::new(PointerWidth::Eight).read(&path).unwrap();
    assert_eq!(snapshot.pid, 4242);
}

#[test]
fn snapshot_fields_are_ordered() {
    let bytes = Record::default().encode(PointerWidth::Eight, TAIL);
    let snapshot = RestoreDecoder::new(PointerWidth::Eight)
        .decode(Cursor::new(bytes))
        .unwrap();
    let names: Vec<&str> = snapshot.fields().into_iter().map(|(name, _)| name).collect();
    assert_eq!(
        names,
        vec!["version_bin", "cwd", "pid", "dictpos", "maskpos", "pw_cur", "argc", "argv"]
    );
    assert_eq!(
        snapshot.fields()[7].1,
        "oclHashcat64.bin -m 0 -a 0 hashes.txt"
    );
}

#[test]
fn snapshot_serialises_to_json() {
    let bytes = Record::default().encode(PointerWidth::Eight, TAIL);
    let snapshot = RestoreDecoder::new(PointerWidth::Eight)
        .decode(Cursor::new(bytes))
        .unwrap();
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["pid"], 4242);
    assert_eq!(json["cwd"], "/opt/engine");
}
