use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn dnacipher(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dnacipher"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn text_argument_encodes_and_decodes() {
    let out = dnacipher(&["a"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "TGA\n");

    let out = dnacipher(&["-d", "tga"]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "A\n");
}

#[test]
fn input_file_is_transcoded_line_by_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    let output = dir.path().join("notes.dna");
    fs::write(&input, "a\r\n\na a\n").unwrap();

    let out = dnacipher(&["-i", path_arg(&input), "-o", path_arg(&output)]);
    assert!(out.status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "TGA\nTGAATCTGA\n");
    assert!(String::from_utf8(out.stderr).unwrap().contains("Wrote 2 records"));
}

#[test]
fn fasta_round_trip_keeps_ids_and_spaces() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("messages.txt");
    let encoded = dir.path().join("messages.fa");
    let decoded = dir.path().join("messages.out");
    let text = "MEET AT THE OLD MILL AT NOON AND COME ALONE PLEASE";
    fs::write(&input, format!("{}\nhello world\n", text)).unwrap();

    let out = dnacipher(&["--fasta", "-w", "20", "-i", path_arg(&input), "-o", path_arg(&encoded)]);
    assert!(out.status.success());
    let fasta = fs::read_to_string(&encoded).unwrap();
    assert!(fasta.starts_with(">msg_1\n"));
    assert!(fasta.contains(">msg_2\n"));
    assert!(fasta.lines().filter(|l| !l.starts_with('>')).all(|l| l.len() <= 20));

    let out = dnacipher(&["-d", "--fasta", "-w", "20", "-i", path_arg(&encoded), "-o", path_arg(&decoded)]);
    assert!(out.status.success());
    assert_eq!(
        fs::read_to_string(&decoded).unwrap(),
        format!(">msg_1\n{}\n>msg_2\nHELLO WORLD\n", text)
    );
}

#[test]
fn invalid_line_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.txt");
    fs::write(&input, "fine\n1+1\n").unwrap();

    let out = dnacipher(&["-i", path_arg(&input)]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("msg_2"));
    assert!(stderr.contains("Only alphabetic characters and spaces allowed"));
}

#[test]
fn text_and_input_conflict() {
    let out = dnacipher(&["hello", "-i", "notes.txt"]);
    assert!(!out.status.success());
}
