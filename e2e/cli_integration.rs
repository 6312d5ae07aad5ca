//! End-to-end CLI round trip (`SPEC_FULL.md` §8, property 9).

use std::process::Command;

use yaz0::is_valid;

fn yaz0fast_bin() -> &'static str {
    env!("CARGO_BIN_EXE_yaz0fast")
}

#[test]
fn compress_then_decompress_round_trips_byte_for_byte() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("in.bin");
    let mid_path = dir.path().join("mid.yaz0");
    let out_path = dir.path().join("out.bin");

    let original: Vec<u8> = (0..4096).map(|i| (i % 251) as u8).collect();
    std::fs::write(&input_path, &original).unwrap();

    let status = Command::new(yaz0fast_bin())
        .args(["-c", input_path.to_str().unwrap(), "-o", mid_path.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    let mid_bytes = std::fs::read(&mid_path).unwrap();
    assert!(is_valid(&mid_bytes));

    let status = Command::new(yaz0fast_bin())
        .args(["-d", mid_path.to_str().unwrap(), "-o", out_path.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(status.success());

    let recovered = std::fs::read(&out_path).unwrap();
    assert_eq!(recovered, original);
}

#[test]
fn auto_detected_filenames_follow_derivation_rules() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("in.bin");
    std::fs::write(&input_path, vec![b'a'; 64]).unwrap();

    // No -o: compress should produce "in.bin.yaz0" next to the input.
    let status = Command::new(yaz0fast_bin())
        .current_dir(dir.path())
        .args(["-c", "in.bin"])
        .status()
        .unwrap();
    assert!(status.success());
    assert!(dir.path().join("in.bin.yaz0").exists());

    // No mode flag and a .yaz0 extension: auto-detect should decompress,
    // stripping the extension to derive "in.bin".
    std::fs::remove_file(dir.path().join("in.bin")).unwrap();
    let status = Command::new(yaz0fast_bin())
        .current_dir(dir.path())
        .args(["in.bin.yaz0"])
        .status()
        .unwrap();
    assert!(status.success());
    let recovered = std::fs::read(dir.path().join("in.bin")).unwrap();
    assert_eq!(recovered, vec![b'a'; 64]);
}

#[test]
fn refuses_to_overwrite_without_force_flag() {
    let dir = tempfile::tempdir().unwrap();
    let input_path = dir.path().join("in.bin");
    let out_path = dir.path().join("out.yaz0");
    std::fs::write(&input_path, vec![b'a'; 64]).unwrap();
    std::fs::write(&out_path, b"already here").unwrap();

    let status = Command::new(yaz0fast_bin())
        .args([
            "-c",
            input_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(!status.success());

    let status = Command::new(yaz0fast_bin())
        .args([
            "-c",
            "-f",
            input_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn help_and_version_exit_zero_without_touching_filesystem() {
    let status = Command::new(yaz0fast_bin()).arg("--help").status().unwrap();
    assert!(status.success());

    let status = Command::new(yaz0fast_bin())
        .arg("--version")
        .status()
        .unwrap();
    assert!(status.success());
}

#[test]
fn missing_input_file_exits_nonzero() {
    let status = Command::new(yaz0fast_bin()).status().unwrap();
    assert!(!status.success());
}
