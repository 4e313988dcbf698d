use std::net::Ipv6Addr;

use canonical::{canonicalize, canonicalize_ipv6, expand, CompressionChoice, ZeroRun};

struct Case {
    name: &'static str,
    input: &'static str,
    expected: &'static str,
    run: Option<(usize, usize)>,
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "leading_zero_suppression",
            input: "1111:2222:3333:4444:5555:0ab9:0e0f:0010",
            expected: "1111:2222:3333:4444:5555:ab9:e0f:10",
            run: None,
        },
        Case {
            name: "single_zero_group_kept",
            input: "1111:2222:3333:4444:0000:0006:0070:0800",
            expected: "1111:2222:3333:4444:0:6:70:800",
            run: None,
        },
        Case {
            name: "interior_run",
            input: "1111:2222:0000:0000:0000:0000:7777:8888",
            expected: "1111:2222::7777:8888",
            run: Some((2, 6)),
        },
        Case {
            name: "trailing_zero_digit_is_not_a_zero_group",
            input: "1111:2222:3330:0000:0000:0666:7777:8888",
            expected: "1111:2222:3330::666:7777:8888",
            run: Some((3, 5)),
        },
        Case {
            name: "lone_zero_before_ones",
            input: "1111:2222:0000:0001:0001:0001:0001:0001",
            expected: "1111:2222:0:1:1:1:1:1",
            run: None,
        },
        Case {
            name: "longer_trailing_run_wins",
            input: "1111:2222:0000:0000:5555:0000:0000:0000",
            expected: "1111:2222:0:0:5555::",
            run: Some((5, 8)),
        },
        Case {
            name: "tie_goes_left",
            input: "1111:2222:0000:0000:5555:0000:0000:8888",
            expected: "1111:2222::5555:0:0:8888",
            run: Some((2, 4)),
        },
        Case {
            name: "leading_run",
            input: "0000:0000:3333:4444:5555:6666:7777:8888",
            expected: "::3333:4444:5555:6666:7777:8888",
            run: Some((0, 2)),
        },
        Case {
            name: "all_zero",
            input: "0000:0000:0000:0000:0000:0000:0000:0000",
            expected: "::",
            run: Some((0, 8)),
        },
        Case {
            name: "loopback",
            input: "0:0:0:0:0:0:0:1",
            expected: "::1",
            run: Some((0, 7)),
        },
        Case {
            name: "uppercase_documentation_prefix",
            input: "2001:0DB8:0000:0000:0001:0000:0000:0001",
            expected: "2001:db8::1:0:0:1",
            run: Some((2, 4)),
        },
    ];

    for case in cases {
        let addr = canonical::canonicalize_address(case.input, &Default::default())
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));

        assert_eq!(addr.canonical, case.expected, "text mismatch for {}", case.name);

        let expected_choice = match case.run {
            Some((start, end)) => CompressionChoice::Run(ZeroRun { start, end }),
            None => CompressionChoice::None,
        };
        assert_eq!(addr.compression, expected_choice, "run mismatch for {}", case.name);
    }
}

/// Every zero/non-zero pattern over eight groups, as an address.
fn all_zero_patterns() -> impl Iterator<Item = Ipv6Addr> {
    (0u16..256).map(|mask| {
        let mut segments = [0u16; 8];
        for (i, segment) in segments.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                // Never 0xffff, so std never picks its IPv4-mapped rendering.
                *segment = 0x0a00 + i as u16;
            }
        }
        Ipv6Addr::from(segments)
    })
}

fn full_form(addr: &Ipv6Addr) -> String {
    addr.segments()
        .iter()
        .map(|s| format!("{s:04x}"))
        .collect::<Vec<_>>()
        .join(":")
}

#[test]
fn agrees_with_std_display_for_every_zero_pattern() {
    for addr in all_zero_patterns() {
        let text = canonicalize(&full_form(&addr)).expect("full form is valid");
        assert_eq!(text, addr.to_string(), "pattern {:?}", addr.segments());
        assert_eq!(canonicalize_ipv6(&addr), text);
    }
}

#[test]
fn output_shape_invariants() {
    for addr in all_zero_patterns() {
        let text = canonicalize(&full_form(&addr)).unwrap();

        assert!(text.matches("::").count() <= 1, "{text}");
        assert!(!text.contains(":::"), "{text}");
        for group in text.split(':').filter(|g| !g.is_empty()) {
            assert!(group == "0" || !group.starts_with('0'), "{text}");
            assert!(group.len() <= 4, "{text}");
        }
    }
}

#[test]
fn expansion_round_trips_to_a_fixed_point() {
    for addr in all_zero_patterns() {
        let text = canonicalize(&full_form(&addr)).unwrap();
        let expanded = expand(&text).expect("canonical text expands");

        assert_eq!(expanded, full_form(&addr));
        assert_eq!(canonicalize(&expanded).unwrap(), text);
    }
}

#[test]
fn uncompressed_canonical_output_is_idempotent() {
    for addr in all_zero_patterns() {
        let text = canonicalize(&full_form(&addr)).unwrap();
        if !text.contains("::") {
            assert_eq!(canonicalize(&text).unwrap(), text);
        }
    }
}
