use serde::Deserialize;

use super::*;
use crate::{
    note::Note,
    tempo::{StopPoint, TempoPoint},
};

#[derive(Deserialize, Debug, PartialEq, Eq)]
enum TestMode {
    Encode,
    Decode,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum FileKind {
    Tempo,
    Notes,
}

#[derive(Deserialize, Debug)]
struct TestEntry {
    pub name: String,
    pub tests: Option<Vec<TestMode>>,
    pub text: String,
    pub payload: Option<String>,
    pub error: Option<String>,
    pub bpms: Option<Vec<(u32, f64)>>,
    pub stops: Option<Vec<(u32, f64)>>,
    pub notes: Option<Vec<(u64, u64, u8, i16)>>,
}

#[derive(Deserialize, Debug)]
struct TestFile {
    pub kind: FileKind,
    pub cases: Vec<TestEntry>,
}

#[derive(Debug, PartialEq)]
enum Expected {
    Tempo(Vec<TempoPoint>, Vec<StopPoint>),
    Notes(Vec<Note>),
}

impl Expected {
    fn from_entry(kind: FileKind, entry: &TestEntry) -> Expected {
        match kind {
            FileKind::Tempo => {
                let bpms = entry.bpms.as_ref().expect("missing field 'bpms'");
                let stops = entry.stops.as_ref().expect("missing field 'stops'");
                Expected::Tempo(
                    bpms.iter()
                        .map(|(tick, bpm)| TempoPoint::new(*tick, *bpm))
                        .collect(),
                    stops
                        .iter()
                        .map(|(tick, seconds)| StopPoint::new(*tick, *seconds))
                        .collect(),
                )
            }
            FileKind::Notes => Expected::Notes(
                entry
                    .notes
                    .as_ref()
                    .expect("missing field 'notes'")
                    .iter()
                    .map(|(start, end, column, special)| {
                        Note::from_raw(*start, *end, *column, *special).unwrap_or_else(|| {
                            panic!(
                                "case '{}' has an unrepresentable note ({}, {}, {}, {})",
                                entry.name, start, end, column, special
                            )
                        })
                    })
                    .collect(),
            ),
        }
    }

    fn encode(&self) -> String {
        match self {
            Expected::Tempo(bpms, stops) => encode_tempo(bpms, stops),
            Expected::Notes(notes) => encode_notes(notes),
        }
    }
}

fn decode(kind: FileKind, text: &str) -> DecodeResult<Expected> {
    Ok(match kind {
        FileKind::Tempo => {
            let (bpms, stops) = decode_tempo(text)?;
            Expected::Tempo(bpms, stops)
        }
        FileKind::Notes => Expected::Notes(decode_notes(text)?),
    })
}

fn payload_kind(kind: FileKind) -> PayloadKind {
    match kind {
        FileKind::Tempo => PayloadKind::Tempo,
        FileKind::Notes => PayloadKind::Notes,
    }
}

fn test_encode_entry(kind: FileKind, entry: &TestEntry, expected: &Expected) {
    let text = expected.encode();
    assert!(
        text == entry.text,
        "case     = {}\nexpected = {}\nfound    = {}",
        entry.name,
        entry.text,
        text
    );

    if let Some(payload) = &entry.payload {
        let bytes = payload_kind(kind)
            .unwrap_text(&text)
            .unwrap_or_else(|err| panic!("case '{}': {}", entry.name, err));
        assert!(
            hex::encode(&bytes) == *payload,
            "case     = {}\nexpected = {}\nfound    = {}",
            entry.name,
            payload,
            hex::encode(&bytes)
        );
    }

    println!("validated encoding of case '{}'", entry.name);
}

fn test_decode_entry(kind: FileKind, entry: &TestEntry, expected: &Expected) {
    let decoded = decode(kind, &entry.text)
        .unwrap_or_else(|err| panic!("failed to decode case '{}': {}", entry.name, err));
    assert_eq!(&decoded, expected, "case = {}", entry.name);

    println!("validated decoding of case '{}'", entry.name);
}

fn test_error_entry(kind: FileKind, entry: &TestEntry, error: &str) {
    match decode(kind, &entry.text) {
        Ok(decoded) => panic!(
            "case '{}' decoded to {:?}, expected {}",
            entry.name, decoded, error
        ),
        Err(err) => assert_eq!(
            format!("{:?}", err.kind()),
            error,
            "case = {}\nerror = {}",
            entry.name,
            err
        ),
    }

    println!("validated {} for case '{}'", error, entry.name);
}

pub fn execute_json_test(data_file: &str) {
    let _ = env_logger::builder().is_test(true).try_init();

    let test_file: TestFile = serde_json::from_str(data_file).expect("malformed data file");
    let default_tests = vec![TestMode::Encode, TestMode::Decode];

    for entry in &test_file.cases {
        if let Some(error) = &entry.error {
            test_error_entry(test_file.kind, entry, error);
            continue;
        }

        let expected = Expected::from_entry(test_file.kind, entry);
        let tests = entry.tests.as_ref().unwrap_or(&default_tests);
        if tests.contains(&TestMode::Encode) {
            test_encode_entry(test_file.kind, entry, &expected);
        }
        if tests.contains(&TestMode::Decode) {
            test_decode_entry(test_file.kind, entry, &expected);
        }
    }
}

macro_rules! json_test {
    ( $test:ident, $name:literal ) => {
        #[test]
        pub fn $test() {
            let data_file = include_str!(concat!("../../test-data/", $name, ".test.json"));

            crate::encoding::test::execute_json_test(data_file);
        }
    };
}

json_test!(test_tempo_fixtures, "tempo");
json_test!(test_notes_fixtures, "notes");
