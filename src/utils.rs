use crate::error::VennError;
use calm_io::stdoutln;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

pub fn print_line_to_stdout(line: &str) -> Result<(), VennError> {
    // output line to stdout.
    // also captures broken pipe that might be caused by | head, for example.
    match stdoutln!("{}", line) {
        Ok(_) => Ok(()),
        Err(e) => match e.kind() {
            std::io::ErrorKind::BrokenPipe => std::process::exit(0),
            _ => Err(VennError::Io(e)),
        },
    }
}

/// Open a report for reading: `-` is stdin, `*.gz` is decompressed on the fly.
pub fn open_input(input: &str) -> Result<Box<dyn BufRead>, VennError> {
    let reader: Box<dyn BufRead> = match input {
        "-" => Box::new(BufReader::new(io::stdin())),
        inp if inp.ends_with(".gz") => Box::new(BufReader::new(MultiGzDecoder::new(File::open(inp)?))),
        rest => Box::new(BufReader::new(File::open(rest)?)),
    };
    Ok(reader)
}

/// Write `content` to `path`, gzip-compressing it when the extension is `.svgz` or `.gz`.
pub fn write_output(path: &Path, content: &str) -> Result<(), VennError> {
    let compress = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("svgz") || ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);
    let file = File::create(path)?;
    if compress {
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(content.as_bytes())?;
        encoder.finish()?;
    } else {
        let mut file = file;
        file.write_all(content.as_bytes())?;
        file.flush()?;
    }
    Ok(())
}

/// Final path component of an identifier, used as its display label.
/// Identifiers ending in a separator yield an empty label.
pub fn basename(identifier: &str) -> String {
    if identifier.ends_with('/') {
        return String::new();
    }
    Path::new(identifier)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| identifier.to_string())
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_basename() {
        assert_eq!(basename("/data/calls/a.vcf.gz"), "a.vcf.gz");
        assert_eq!(basename("relative/dir/b.vcf"), "b.vcf");
        assert_eq!(basename("c.vcf"), "c.vcf");
        assert_eq!(basename("dir/"), "");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_write_output_compressed() -> Result<(), Box<dyn std::error::Error>> {
        let path = std::env::temp_dir().join(format!("vcfcompare2venn-{}.svgz", std::process::id()));
        write_output(&path, "<svg/>")?;
        let mut decoded = String::new();
        GzDecoder::new(File::open(&path)?).read_to_string(&mut decoded)?;
        std::fs::remove_file(&path)?;
        assert_eq!(decoded, "<svg/>");
        Ok(())
    }
}
