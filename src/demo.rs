use canonical::{CanonicalizeConfig, ValidationError, canonicalize_with_config};

/// A reference address and the canonical form it must produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoCase {
    pub input: &'static str,
    pub expected: &'static str,
}

/// Reference table covering suppression, compression, and tie-breaking.
pub const DEMO_CASES: [DemoCase; 8] = [
    DemoCase {
        input: "1111:2222:3333:4444:5555:0ab9:0e0f:0010",
        expected: "1111:2222:3333:4444:5555:ab9:e0f:10",
    },
    DemoCase {
        input: "1111:2222:3333:4444:0000:0006:0070:0800",
        expected: "1111:2222:3333:4444:0:6:70:800",
    },
    DemoCase {
        input: "1111:2222:0000:0000:0000:0000:7777:8888",
        expected: "1111:2222::7777:8888",
    },
    DemoCase {
        input: "1111:2222:3330:0000:0000:0666:7777:8888",
        expected: "1111:2222:3330::666:7777:8888",
    },
    DemoCase {
        input: "1111:2222:0000:0001:0001:0001:0001:0001",
        expected: "1111:2222:0:1:1:1:1:1",
    },
    DemoCase {
        input: "1111:2222:0000:0000:5555:0000:0000:0000",
        expected: "1111:2222:0:0:5555::",
    },
    DemoCase {
        input: "1111:2222:0000:0000:5555:0000:0000:8888",
        expected: "1111:2222::5555:0:0:8888",
    },
    DemoCase {
        input: "0000:0000:3333:4444:5555:6666:7777:8888",
        expected: "::3333:4444:5555:6666:7777:8888",
    },
];

/// Result of running one [`DemoCase`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOutcome {
    pub case: DemoCase,
    pub actual: Result<String, ValidationError>,
}

impl DemoOutcome {
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(actual) if actual == self.case.expected)
    }
}

/// Run every reference case through the pipeline.
pub fn run_demo(cfg: &CanonicalizeConfig) -> Vec<DemoOutcome> {
    DEMO_CASES
        .iter()
        .map(|case| DemoOutcome {
            case: *case,
            actual: canonicalize_with_config(case.input, cfg),
        })
        .collect()
}
