use std::fs;
use std::io::Write;

use dnacipher::batch::{lines_to_records, transcode_records};
use dnacipher::complement::complement;
use dnacipher::fasta::{parse_fasta_file, write_fasta, FastaError};
use dnacipher::{decode, encode, CodonTable, CollisionPolicy, Direction, TranscodeError, Transcoder};

/// Symbols whose codon is not shared with another symbol.
const LOSSLESS: &str = "ACDEFGHIJKLMNOPQRSTUVWXYZ ";

#[test]
fn known_values() {
    assert_eq!(encode("A").unwrap(), "TGA");
    assert_eq!(decode("TGA").unwrap(), "A");
    assert_eq!(encode("").unwrap(), "");
    assert_eq!(decode("").unwrap(), "");
}

#[test]
fn round_trip_every_lossless_symbol() {
    for symbol in LOSSLESS.chars() {
        let text = symbol.to_string();
        assert_eq!(decode(&encode(&text).unwrap()).unwrap(), text, "symbol {:?}", symbol);
    }

    let lower: String = LOSSLESS.to_lowercase();
    assert_eq!(decode(&encode(&lower).unwrap()).unwrap(), LOSSLESS);
}

#[test]
fn encoded_length_is_three_bases_per_symbol() {
    let text = "Sphinx of black quartz judge my vow";
    let encoded = encode(text).unwrap();
    assert_eq!(encoded.len(), text.len() * 3);
    assert!(encoded.chars().all(|c| "ACGT".contains(c)));
}

#[test]
fn validation_failures() {
    assert!(matches!(encode("1+1"), Err(TranscodeError::InvalidAlphabet { .. })));
    assert!(matches!(encode("héllo"), Err(TranscodeError::InvalidAlphabet { found: 'É', .. })));
    assert!(matches!(decode("AXTG"), Err(TranscodeError::InvalidSequence { found: 'X', .. })));
    assert!(matches!(decode("ACGU"), Err(TranscodeError::InvalidSequence { found: 'U', .. })));
}

#[test]
fn incomplete_trailing_group_yields_sentinel() {
    let decoded = decode("ATCGA").unwrap();
    assert!(decoded.contains('?'));
    assert_eq!(decoded.chars().count(), 2);
}

#[test]
fn complement_is_involutive() {
    let bases = encode("involution holds").unwrap();
    let once = complement(&bases).unwrap();
    assert_eq!(complement(&once).unwrap(), bases);
}

#[test]
fn lossy_collision_is_documented_by_table() {
    let table = CodonTable::standard();
    let collisions = table.collisions();
    assert_eq!(collisions.len(), 1);
    assert_eq!(collisions[0].symbols, vec!['B', 'H']);

    assert_eq!(decode(&encode("bob").unwrap()).unwrap(), "HOH");
}

#[test]
fn custom_injective_table_round_trips_everything() {
    // Shift every codon of a simple enumeration so none collide
    let bases = ['G', 'T', 'A', 'C'];
    let entries: Vec<(char, String)> = ('A'..='Z')
        .chain([' '])
        .enumerate()
        .map(|(i, s)| (s, [bases[i / 16], bases[(i / 4) % 4], bases[i % 4]].iter().collect()))
        .collect();
    let transcoder = Transcoder::new(CodonTable::new(entries).unwrap(), CollisionPolicy::Reject).unwrap();

    let text = "THE FIVE BOXING WIZARDS JUMP QUICKLY";
    let encoded = transcoder.encode(text).unwrap();
    assert_eq!(transcoder.decode(&encoded).unwrap(), text);
}

#[test]
fn transcoder_is_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| decode(&encode("concurrent readers").unwrap()).unwrap()))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "CONCURRENT READERS");
    }
}

#[test]
fn fasta_batch_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messages.fa");

    let records = lines_to_records("meet at noon\nbring the map\n");
    let encoded = transcode_records(Transcoder::standard(), Direction::Encode, &records).unwrap();
    let mut file = fs::File::create(&path).unwrap();
    write_fasta(&mut file, &encoded, 60).unwrap();
    file.flush().unwrap();

    let parsed = parse_fasta_file(&path).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].id, "msg_1");

    let decoded = transcode_records(Transcoder::standard(), Direction::Decode, &parsed).unwrap();
    // B decodes as H
    assert_eq!(decoded[0].data, "MEET AT NOON");
    assert_eq!(decoded[1].data, "HRING THE MAP");
}

#[test]
fn fasta_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_fasta_file(dir.path().join("absent.fa"));
    assert!(matches!(result, Err(FastaError::IoError(_))));
}
