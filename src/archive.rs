use anyhow::{anyhow, Context};
use std::fs::File;
use std::io::{Cursor, ErrorKind, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

const ZIP_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// One file inside a submissions archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
        }
    }
}

pub fn is_zip_bytes(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && bytes[..4] == ZIP_SIGNATURE
}

/// Decompresses every file entry, in central directory order. Directory
/// markers are dropped.
pub fn read_archive_bytes(bytes: &[u8]) -> anyhow::Result<Vec<ArchiveEntry>> {
    if !is_zip_bytes(bytes) {
        return Err(anyhow!("input is not a zip archive"));
    }
    read_entries(Cursor::new(bytes))
}

pub fn read_archive_file(path: &Path) -> anyhow::Result<Vec<ArchiveEntry>> {
    let mut f = File::open(path)
        .with_context(|| format!("failed to open archive {}", path.to_string_lossy()))?;
    let not_zip = || anyhow!("not a zip archive: {}", path.to_string_lossy());
    let mut sig = [0u8; 4];
    match f.read_exact(&mut sig) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Err(not_zip()),
        Err(e) => return Err(e).context("failed to read file signature"),
    }
    if sig != ZIP_SIGNATURE {
        return Err(not_zip());
    }
    f.rewind().context("failed to rewind archive")?;
    read_entries(f)
        .with_context(|| format!("failed to read archive {}", path.to_string_lossy()))
}

fn read_entries<R: Read + Seek>(reader: R) -> anyhow::Result<Vec<ArchiveEntry>> {
    let mut archive = ZipArchive::new(reader).context("invalid zip archive")?;
    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .with_context(|| format!("failed to open zip entry #{i}"))?;
        if file.is_dir() {
            continue;
        }
        let path = file.name().to_string();
        let mut bytes = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut bytes)
            .with_context(|| format!("failed to extract {path}"))?;
        entries.push(ArchiveEntry { path, bytes });
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;
    use zip::{CompressionMethod, ZipWriter};

    fn build_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let opts = FileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.add_directory("Jane-Doe/", opts).expect("add dir");
        for (name, data) in files {
            zip.start_file(*name, opts).expect("start file");
            zip.write_all(data).expect("write file");
        }
        zip.finish().expect("finish zip").into_inner()
    }

    #[test]
    fn reads_files_in_archive_order() {
        let bytes = build_zip(&[
            ("Jane-Doe/script-1.pdf", &b"%PDF-a"[..]),
            ("Adam-Smith/script-2.pdf", &b"%PDF-b"[..]),
            ("notes.txt", &b"hello"[..]),
        ]);
        let entries = read_archive_bytes(&bytes).expect("read archive");
        let paths: Vec<&str> = entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["Jane-Doe/script-1.pdf", "Adam-Smith/script-2.pdf", "notes.txt"]
        );
        assert_eq!(entries[1].bytes, b"%PDF-b".to_vec());
    }

    #[test]
    fn rejects_non_zip_input() {
        assert!(!is_zip_bytes(b"%PDF-1.7"));
        assert!(read_archive_bytes(b"%PDF-1.7").is_err());
        assert!(read_archive_bytes(b"").is_err());
    }

    #[test]
    fn short_or_foreign_files_are_not_archives() {
        let dir = std::env::temp_dir()
            .join(format!("scriptmarkd-archive-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create temp dir");

        let fixtures = [
            ("empty.zip", &b""[..]),
            ("short.zip", &b"PK"[..]),
            ("doc.zip", &b"%PDF-1.7"[..]),
        ];
        for (name, data) in fixtures {
            let path = dir.join(name);
            std::fs::write(&path, data).expect("write fixture");
            let err = read_archive_file(&path).unwrap_err();
            assert!(err.to_string().starts_with("not a zip archive"), "{name}: {err}");
        }

        let path = dir.join("ok.zip");
        let bytes = build_zip(&[("Jane-Doe/script-1.pdf", &b"%PDF"[..])]);
        std::fs::write(&path, bytes).expect("write zip");
        assert_eq!(read_archive_file(&path).expect("read archive").len(), 1);
    }
}
