use crate::error::{FormatError, VennError};
use crate::parser::{self, Label};
use crate::utils;
use log::debug;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::io::BufRead;

/// Number of VN records in a three-set vcf-compare report.
pub const VENN3_RECORDS: usize = 7;

/// The seven regions of a three-set diagram, in matplotlib-venn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    A,
    B,
    AB,
    C,
    AC,
    BC,
    ABC,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::A,
        Region::B,
        Region::AB,
        Region::C,
        Region::AC,
        Region::BC,
        Region::ABC,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One `VN` line: a count and the sources sharing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the report
    pub line: usize,
    pub count: u64,
    pub labels: Vec<Label>,
}

impl Record {
    pub fn from_line(line_number: usize, line: &str) -> Result<Self, FormatError> {
        let marker_line = parser::parse_marker_line(line).map_err(|e| FormatError::CorruptRecord {
            line: line_number,
            reason: e.to_string(),
        })?;
        let record = Record {
            line: line_number,
            count: marker_line.count,
            labels: marker_line.labels,
        };
        if !(1..=3).contains(&record.labels.len()) {
            return Err(FormatError::CorruptRecord {
                line: line_number,
                reason: format!("expected 1 to 3 identifiers, found {}", record.labels.len()),
            });
        }
        if record.members().len() != record.labels.len() {
            return Err(FormatError::CorruptRecord {
                line: line_number,
                reason: "identifier listed more than once".into(),
            });
        }
        Ok(record)
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|l| l.identifier.as_str())
    }

    pub fn members(&self) -> BTreeSet<&str> {
        self.identifiers().collect()
    }
}

/// Records bucketed by how many sources they name.
#[derive(Debug, Default)]
pub struct Partition {
    pub singles: Vec<Record>,
    pub duos: Vec<Record>,
    pub triples: Vec<Record>,
}

impl Partition {
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut partition = Partition::default();
        for record in records {
            match record.labels.len() {
                1 => partition.singles.push(record),
                2 => partition.duos.push(record),
                _ => partition.triples.push(record),
            }
        }
        partition
    }

    fn check_sizes(&self) -> Result<(), FormatError> {
        if self.singles.len() != 3 || self.duos.len() != 3 || self.triples.len() != 1 {
            return Err(FormatError::WrongBucketSizes {
                singles: self.singles.len(),
                duos: self.duos.len(),
                triples: self.triples.len(),
            });
        }
        Ok(())
    }

    /// Assign A < B < C by identifier and collect the counts in Venn3 order.
    pub fn into_venn3(self) -> Result<Venn3, FormatError> {
        self.check_sizes()?;

        let duos: HashMap<(&str, &str), u64> = self
            .duos
            .iter()
            .map(|duo| {
                let mut ids = duo.identifiers();
                // sizes are checked, a duo has exactly two identifiers
                let (x, y) = (ids.next().unwrap_or_default(), ids.next().unwrap_or_default());
                (unordered_pair(x, y), duo.count)
            })
            .collect();

        let mut singles: Vec<(&str, u64)> = self
            .singles
            .iter()
            .map(|single| (single.labels[0].identifier.as_str(), single.count))
            .collect();
        singles.sort_by(|x, y| x.0.cmp(y.0));
        let [(a, a_count), (b, b_count), (c, c_count)] = [singles[0], singles[1], singles[2]];
        debug!("assigned A={a}, B={b}, C={c}");

        let pair_count = |x: &str, y: &str| -> Result<u64, FormatError> {
            duos.get(&unordered_pair(x, y)).copied().ok_or_else(|| {
                FormatError::MismatchedIdentifiers(format!("no pairwise record for {x} and {y}"))
            })
        };
        let ab = pair_count(a, b)?;
        let ac = pair_count(a, c)?;
        let bc = pair_count(b, c)?;

        let triple = &self.triples[0];
        let expected: BTreeSet<&str> = [a, b, c].into_iter().collect();
        if triple.members() != expected {
            return Err(FormatError::MismatchedIdentifiers(format!(
                "triple record on line {} does not name {a}, {b} and {c}",
                triple.line
            )));
        }

        Ok(Venn3 {
            subsets: [a_count, b_count, ab, c_count, ac, bc, triple.count],
            labels: [utils::basename(a), utils::basename(b), utils::basename(c)],
            identifiers: [a.to_string(), b.to_string(), c.to_string()],
        })
    }
}

fn unordered_pair<'s>(x: &'s str, y: &'s str) -> (&'s str, &'s str) {
    if x <= y {
        (x, y)
    } else {
        (y, x)
    }
}

/// Overlap counts in the order `(A, B, AB, C, AC, BC, ABC)` with their labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Venn3 {
    pub subsets: [u64; 7],
    pub labels: [String; 3],
    pub identifiers: [String; 3],
}

impl Venn3 {
    pub fn subset(&self, region: Region) -> u64 {
        self.subsets[region.index()]
    }
}

/// Build a Venn3 result from the lines of a vcf-compare report.
/// Lines whose first field is not `VN` are ignored.
pub fn subsets_from_lines<I, S>(lines: I) -> Result<Venn3, FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut ignored = 0usize;
    let mut marker_lines: Vec<(usize, S)> = Vec::new();
    for (ind, line) in lines.into_iter().enumerate() {
        if parser::is_marker_line(line.as_ref()) {
            marker_lines.push((ind + 1, line));
        } else {
            ignored += 1;
        }
    }
    debug!("found {} VN records, ignored {} other lines", marker_lines.len(), ignored);
    if marker_lines.len() != VENN3_RECORDS {
        return Err(FormatError::UnsupportedCardinality {
            found: marker_lines.len(),
        });
    }
    let records = marker_lines
        .iter()
        .map(|(line_number, line)| Record::from_line(*line_number, line.as_ref()))
        .collect::<Result<Vec<Record>, FormatError>>()?;
    Partition::from_records(records).into_venn3()
}

/// Read a whole report and build its Venn3 result. The reader is consumed.
pub fn subsets_from_reader<R: BufRead>(reader: R) -> Result<Venn3, VennError> {
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    Ok(subsets_from_lines(lines)?)
}
