//! VCF methylation extractor.
//!
//! Consumes filtered (non-header) variant lines and two membership sets:
//! positions used to confirm bisulfite conversion, and positions whose
//! methylation counts are reported as targets. Each line contributes at
//! most one rate to the conversion accumulator and at most one row to the
//! target list.
//!
//! The allele-depth encoding is nested: the sample field is the last
//! tab-separated column, its subfields are colon-separated, and the last
//! subfield is a comma-separated depth list. Two decodings exist:
//!
//! * two or more depths: `rate = d0 / (d0 + d1)`, a fraction;
//! * a single depth: `converted = total_depth − d0` and
//!   `rate = 100 − converted / d0`.
//!
//! The fallback branch divides by the same single-element depth it
//! subtracts, which looks like it double-counts. That is exactly what the
//! legacy counter computed and downstream numbers depend on it, so it is
//! preserved and pinned by tests rather than corrected.

use hashbrown::HashSet;

use crate::error::{AmplimethError, Result};

/// One reported target position with its unmethylated/methylated counts.
///
/// The fields stay strings: the fallback decoding copies a raw subfield
/// through without interpreting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetCount {
    pub position: String,
    pub unmethylated: String,
    pub methylated: String,
}

impl std::fmt::Display for TargetCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}",
            self.position, self.unmethylated, self.methylated
        )
    }
}

/// Accumulates conversion rates and target rows over variant lines.
#[derive(Debug)]
pub struct MethylationExtractor {
    confirm: HashSet<String>,
    check: HashSet<String>,
    conversion_rates: Vec<f64>,
    targets: Vec<TargetCount>,
}

impl MethylationExtractor {
    pub fn new(confirm: HashSet<String>, check: HashSet<String>) -> Self {
        Self {
            confirm,
            check,
            conversion_rates: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Decodes one non-header variant line and updates the accumulators.
    ///
    /// `line_no` is the 1-based line number used in diagnostics. A zero
    /// denominator in either decoding is a fatal
    /// [`AmplimethError::DivisionUndefined`].
    pub fn process_line(&mut self, line_no: usize, line: &str) -> Result<()> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 {
            return Err(AmplimethError::malformed(
                line_no,
                format!("expected tab-separated record, got {} field(s)", fields.len()),
            ));
        }
        let position = fields[1];
        // split yields at least one element, so last-index access is safe
        let sample = fields[fields.len() - 1];
        let subfields: Vec<&str> = sample.split(':').collect();
        let depths: Vec<&str> = subfields[subfields.len() - 1].split(',').collect();

        let parse = |value: &str, what: &str| -> Result<i64> {
            value.trim().parse::<i64>().map_err(|_| {
                AmplimethError::malformed(line_no, format!("non-integer {what}: {value:?}"))
            })
        };

        let (rate, target) = if depths.len() > 1 {
            let d0 = parse(depths[0], "unmethylated depth")?;
            let d1 = parse(depths[1], "methylated depth")?;
            if d0 + d1 == 0 {
                return Err(AmplimethError::DivisionUndefined {
                    position: position.to_string(),
                    detail: "total allele depth is zero",
                });
            }
            let rate = d0 as f64 / (d0 + d1) as f64;
            let target = TargetCount {
                position: position.to_string(),
                unmethylated: d0.to_string(),
                methylated: d1.to_string(),
            };
            (rate, target)
        } else {
            if subfields.len() < 3 {
                return Err(AmplimethError::malformed(
                    line_no,
                    format!(
                        "sample field has {} subfield(s), fallback decoding needs 3",
                        subfields.len()
                    ),
                ));
            }
            let d0 = parse(depths[0], "allele depth")?;
            let total = parse(subfields[1], "total depth")?;
            let converted = total - d0;
            if d0 == 0 {
                return Err(AmplimethError::DivisionUndefined {
                    position: position.to_string(),
                    detail: "allele depth is zero in fallback decoding",
                });
            }
            let rate = 100.0 - converted as f64 / d0 as f64;
            let target = TargetCount {
                position: position.to_string(),
                unmethylated: subfields[2].to_string(),
                methylated: converted.to_string(),
            };
            (rate, target)
        };

        if self.confirm.contains(position) {
            self.conversion_rates.push(rate);
        }
        if self.check.contains(position) {
            self.targets.push(target);
        }
        Ok(())
    }

    /// Arithmetic mean of the accumulated conversion rates.
    ///
    /// An empty accumulator yields exactly 0.0. This is the documented
    /// convention for runs where no confirm position was seen, not an
    /// incidental default.
    pub fn mean_conversion_rate(&self) -> f64 {
        if self.conversion_rates.is_empty() {
            return 0.0;
        }
        self.conversion_rates.iter().sum::<f64>() / self.conversion_rates.len() as f64
    }

    pub fn conversion_rates(&self) -> &[f64] {
        &self.conversion_rates
    }

    pub fn targets(&self) -> &[TargetCount] {
        &self.targets
    }

    /// Consumes the extractor, returning the mean conversion rate and the
    /// accumulated target rows.
    pub fn finish(self) -> (f64, Vec<TargetCount>) {
        let rate = self.mean_conversion_rate();
        (rate, self.targets)
    }
}
