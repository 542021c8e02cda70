//! The fixed execution plan every analysis job walks through.

/// One progress checkpoint of the plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    pub progress: u8,
    pub label: &'static str,
}

/// Label of a freshly created job, before the first stage is reached.
pub const INITIAL_TASK: &str = "Initializing Ingestion...";

/// Label of a job once the runner has walked the whole table.
pub const TERMINAL_TASK: &str = "Done";

/// Label of the record synthesized for ids the store has never seen.
pub const FALLBACK_TASK: &str = "Restored from Archive";

/// Stages in execution order. Progress is strictly increasing and ends at 100.
pub static STAGES: [Stage; 6] = [
    Stage { progress: 10, label: "Ingesting Sentinel-1/2 Data..." },
    Stage { progress: 30, label: "Atmospheric Correction (USHE)..." },
    Stage { progress: 50, label: "Running Physics Inversion (PCFC)..." },
    Stage { progress: 75, label: "Generating Voxel Models..." },
    Stage { progress: 90, label: "Validating with Quantum Constraints..." },
    Stage { progress: 100, label: "Finalizing Report..." },
];

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Position of a progress value in the table, if it is one of its checkpoints.
    pub(crate) fn stage_index(progress: u8) -> Option<usize> {
        STAGES.iter().position(|stage| stage.progress == progress)
    }

    #[test]
    fn progress_is_strictly_increasing() {
        assert!(STAGES.windows(2).all(|w| w[0].progress < w[1].progress));
        assert!(STAGES[0].progress > 0);
    }

    #[test]
    fn last_stage_reaches_one_hundred() {
        assert_eq!(STAGES.last().map(|s| s.progress), Some(100));
    }

    #[test]
    fn labels_are_distinct() {
        for (i, a) in STAGES.iter().enumerate() {
            for b in &STAGES[i + 1..] {
                assert_ne!(a.label, b.label);
            }
            assert_ne!(a.label, INITIAL_TASK);
            assert_ne!(a.label, TERMINAL_TASK);
        }
    }

    #[test]
    fn stage_index_finds_checkpoints_only() {
        assert_eq!(stage_index(10), Some(0));
        assert_eq!(stage_index(100), Some(5));
        assert_eq!(stage_index(0), None);
        assert_eq!(stage_index(42), None);
    }
}
