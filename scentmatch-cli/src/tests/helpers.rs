//! Test helpers for writing CLI fixture files.

use camino::{Utf8Path, Utf8PathBuf};
use scentmatch_core::test_support::sample_catalogue;
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write fixture file");
}

/// Temporary directory holding a catalogue and an answers file.
#[derive(Debug)]
pub(super) struct Workspace {
    _tmp: TempDir,
    pub(super) root: Utf8PathBuf,
    pub(super) catalogue: Utf8PathBuf,
    pub(super) answers: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let catalogue = root.join("catalogue.json");
        let answers = root.join("answers.json");
        Self {
            _tmp: tmp,
            root,
            catalogue,
            answers,
        }
    }

    pub(super) fn write_sample_catalogue(&self) {
        let payload =
            serde_json::to_string_pretty(&sample_catalogue()).expect("serialize catalogue");
        write_utf8(&self.catalogue, payload.as_bytes());
    }

    pub(super) fn write_answers(&self, answers: &serde_json::Value) {
        let payload = serde_json::to_string(answers).expect("serialize answers");
        write_utf8(&self.answers, payload.as_bytes());
    }
}
