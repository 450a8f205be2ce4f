use cube_parser::{COMMANDS, PALETTE, Reader, parse_colour, parse_message, parse_offset, parse_position};

/// Generate various fuzzy input patterns
fn generate_fuzz_patterns() -> Vec<Vec<u8>> {
    let mut patterns = Vec::new();

    // Every single byte
    for i in 0..=255u8 {
        patterns.push(vec![i]);
    }

    // Every verb followed by every prefix of every alias
    for cmd in &COMMANDS {
        for alias in PALETTE {
            let name = alias.name.as_bytes();
            for len in 0..=name.len() {
                let mut p = format!("{} ", cmd.name).into_bytes();
                p.extend_from_slice(&name[..len]);
                patterns.push(p);
            }
        }
    }

    // Argument fragments that end early
    for fragment in ["set 1", "set 12", "line 000 3", "box 000 333 ff", "sphere 111", "shift", "shift x", "copyplane x 1", "   ", "\0\0\0"] {
        patterns.push(fragment.as_bytes().to_vec());
    }

    // Random bytes
    let mut rng = fastrand::Rng::with_seed(0x00C0_BE42);
    for _ in 0..2_000 {
        let len = rng.usize(0..48);
        patterns.push((0..len).map(|_| rng.u8(..)).collect());
    }

    // Random strings from the command alphabet
    let alphabet = b"allshiftsetlineboxspherenextcopymoveplanehelp 0123456789abcdefhxyz+-;]redbluepurple";
    for _ in 0..5_000 {
        let len = rng.usize(0..32);
        patterns.push((0..len).map(|_| alphabet[rng.usize(..alphabet.len())]).collect());
    }

    patterns
}

#[test]
fn fuzz_parse_message_never_panics() {
    for pattern in generate_fuzz_patterns() {
        let mut message = pattern.clone();
        let _ = parse_message(&mut message);
        assert_eq!(message.len(), pattern.len());
    }
}

#[test]
fn fuzz_decoders_stay_in_bounds() {
    for pattern in generate_fuzz_patterns() {
        let mut reader = Reader::new(&pattern);
        let _ = parse_colour(&mut reader);
        assert!(reader.position() <= pattern.len());
        let _ = parse_position(&mut reader);
        assert!(reader.position() <= pattern.len());
        let _ = parse_offset(&mut reader);
        assert!(reader.position() <= pattern.len());
        assert_eq!(reader.remaining(), pattern.len() - reader.position());
    }
}

#[test]
fn fuzz_fresh_parses_agree() {
    for pattern in generate_fuzz_patterns() {
        let mut first = pattern.clone();
        let mut second = pattern.clone();
        assert_eq!(parse_message(&mut first), parse_message(&mut second));
    }
}
