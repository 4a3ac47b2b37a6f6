//! Decode a small catalog of element sets, including an Alpha-5 entry

use approx::assert_relative_eq;
use tle_decoder::*;

const CATALOG: &str = include_str!("../test_fixtures/catalog.txt");

const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

#[test]
fn catalog() {
    let set = decode_set(CATALOG).unwrap();
    assert_eq!(set.len(), 4);

    let ids: Vec<CatalogId> = set.iter().map(|t| t.catalog_id()).collect();
    assert_eq!(ids, vec![37481, 39120, 25544, 335544]);

    let names: Vec<Option<&str>> = set.iter().map(|t| t.name.as_deref()).collect();
    assert_eq!(
        names,
        vec![Some("GEO1"), Some("GEO2"), None, Some("TBA - TO BE ASSIGNED")]
    );

    let geo1 = &set[0];
    assert_eq!(geo1.international_designator.launch_year, "11");
    assert_eq!(geo1.international_designator.launch_number, "019");
    assert_eq!(geo1.international_designator.launch_piece, "A");
    assert_relative_eq!(geo1.mean_motion_dot, -0.00000009);
    assert_eq!(geo1.bstar, 0.0);
    assert_relative_eq!(geo1.elements.eccentricity, 0.000164);
    assert_relative_eq!(geo1.elements.mean_motion, 1.00272292);
    assert_eq!(geo1.elements.revolution_number, 4457);
    assert_eq!(geo1.epoch.timestamp.to_string(), "2023-07-09 10:49:08.192928 UTC");

    let alpha5 = &set[3];
    assert_eq!(alpha5.catalog_number.raw, "Z5544");
    assert!(alpha5.catalog_number.is_alpha5());
    assert_eq!(alpha5.line1_checksum, 2);
    assert_eq!(alpha5.line2_checksum, 5);
}

#[test]
fn iss_fields() {
    let tle = decode(&format!("{ISS_LINE1}\n{ISS_LINE2}")).unwrap();
    assert_eq!(tle.classification, Classification::Unclassified);
    assert_eq!(tle.international_designator.raw, "98067A");
    assert_eq!(tle.epoch.raw, "08264.51782528");
    assert_relative_eq!(tle.mean_motion_dot, -0.00002182);
    assert_eq!(tle.mean_motion_ddot, 0.0);
    assert_relative_eq!(tle.bstar, -0.000011606);
    assert_eq!(tle.ephemeris_type, '0');
    assert_eq!(tle.element_set_number, 292);
    assert_relative_eq!(tle.elements.inclination, 51.6416);
    assert_relative_eq!(tle.elements.right_ascension, 247.4627);
    assert_relative_eq!(tle.elements.eccentricity, 0.0006703);
    assert_relative_eq!(tle.elements.argument_of_perigee, 130.536);
    assert_relative_eq!(tle.elements.mean_anomaly, 325.0288);
    assert_relative_eq!(tle.elements.mean_motion, 15.72125391);
    assert_eq!(tle.elements.revolution_number, 56353);
    assert_eq!(tle.epoch.timestamp.to_string(), "2008-09-20 12:25:40.104192 UTC");
}

#[test]
fn raw_text_is_retained() {
    let text = format!("\n\n  ISS (ZARYA)\n{ISS_LINE1}\n{ISS_LINE2}\n\n");
    let tle = decode(&text).unwrap();
    assert_eq!(tle.contents, text.trim());
    assert_eq!(tle.line1, ISS_LINE1);
    assert_eq!(tle.line2, ISS_LINE2);
    assert_eq!(tle.name.as_deref(), Some("ISS (ZARYA)"));
}

#[test]
fn any_altered_checksum_digit_fails() {
    for (line, other, number) in [
        (ISS_LINE1, ISS_LINE2, LineNumber::One),
        (ISS_LINE2, ISS_LINE1, LineNumber::Two),
    ] {
        for d in (0..=9).filter(|d| *d != 7) {
            let altered = format!("{}{d}", &line[..68]);
            let text = match number {
                LineNumber::One => format!("{altered}\n{other}"),
                LineNumber::Two => format!("{other}\n{altered}"),
            };
            let err = decode(&text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Checksum, "{err}");
            assert!(matches!(err, DecodeError::Checksum { line, .. } if line == number));
        }
    }
}

#[test]
fn mismatched_catalog_numbers() {
    // Checksums are valid, only the catalog numbers differ
    let line1 = "1 25544U 98067A   20274.51782528  .00000867  00000-0  22813-4 0  9994";
    let line2 = "2 25545  51.6441  93.0000 0001400  11.0000 349.0000 15.49300070250768";
    let err = decode(&format!("{line1}\n{line2}")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(
        err,
        DecodeError::CatalogNumberMismatch {
            line1: "25544".to_owned(),
            line2: "25545".to_owned(),
        }
    );
}

#[test]
fn wrong_line_counts() {
    assert_eq!(decode(ISS_LINE1).unwrap_err().kind(), ErrorKind::Format);
    assert_eq!(decode("").unwrap_err().kind(), ErrorKind::Format);

    let four = format!("A\nB\n{ISS_LINE1}\n{ISS_LINE2}");
    let err = decode(&four).unwrap_err();
    assert!(matches!(err, DecodeError::LineCount { count: 4, .. }));
    assert!(err.to_string().contains(ISS_LINE2));
}

#[test]
fn failing_set_entry_is_indexed() {
    let catalog = CATALOG.replacen("2 39120   2.3950", "2 39120   2.39x0", 1);
    let err = decode_set(&catalog).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Numeric);
    match err {
        DecodeError::SetEntry { index, source } => {
            assert_eq!(index, 1);
            assert!(matches!(
                *source,
                DecodeError::Numeric {
                    field: Field::Inclination,
                    ..
                }
            ));
        }
        _ => panic!("Expected a set entry error, got {err:?}"),
    }
}

#[test]
fn decoder_from_config() {
    let cfg = DecoderConfig::from_toml_str("verify-checksums = false").unwrap();
    let decoder = Decoder::new(cfg);
    let line2 = format!("{}0", &ISS_LINE2[..68]);
    let tle = decoder.decode(&format!("{ISS_LINE1}\n{line2}")).unwrap();
    assert_eq!(tle.line2_checksum, 0);
    assert_eq!(tle.catalog_id(), 25544);
}

#[test]
fn decoding_is_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| decode_set(CATALOG).map(|s| s.len())))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), Ok(4));
    }
}
