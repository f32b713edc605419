//! External read-count collaborator.
//!
//! The summary report needs the total read count of the alignment
//! container the variants were called from. The lookup is behind a trait
//! so pipelines can be tested without shelling out; the shipped
//! implementation blocks on `samtools view -c`. Failure or non-numeric
//! output is a fatal [`AmplimethError::ExternalTool`] — no retry policy is
//! defined.

use std::path::Path;
use std::process::Command;

use crate::error::{AmplimethError, Result};

/// Path-in, integer-out read-count lookup.
pub trait ReadCounter {
    fn count_reads(&self, alignment: &Path) -> Result<u64>;
}

/// Counts reads by invoking `samtools view -c`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SamtoolsReadCounter;

impl ReadCounter for SamtoolsReadCounter {
    fn count_reads(&self, alignment: &Path) -> Result<u64> {
        let output = Command::new("samtools")
            .arg("view")
            .arg("-c")
            .arg(alignment)
            .output()
            .map_err(|e| AmplimethError::external_tool(format!("failed to run samtools: {e}")))?;

        if !output.status.success() {
            return Err(AmplimethError::external_tool(format!(
                "samtools view -c exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let count = stdout.trim();
        count.parse::<u64>().map_err(|_| {
            AmplimethError::external_tool(format!(
                "samtools view -c returned non-numeric output: {count:?}"
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic counter for pipeline tests.
    pub(crate) struct FixedReadCounter(pub u64);

    impl ReadCounter for FixedReadCounter {
        fn count_reads(&self, _alignment: &Path) -> Result<u64> {
            Ok(self.0)
        }
    }

    #[test]
    fn fixed_counter_is_injectable() {
        let counter: &dyn ReadCounter = &FixedReadCounter(42);
        assert_eq!(counter.count_reads(Path::new("any.bam")).unwrap(), 42);
    }
}
