use afl::fuzz;
use dd_hetu::{is_valid, IdentityCode, IndividualNumberKind, ValidatorConfig, HETU_LENGTH};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().rposition(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_config(rng: &mut StdRng) -> ValidatorConfig {
    ValidatorConfig::new()
        .allow_temporary(rng.gen_bool(0.5))
        .allow_debug_checksum_bypass(rng.gen_bool(0.1))
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let config = gen_config(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Config: {:?}", config);
    }

    let result = IdentityCode::parse(input, &config);

    // Without the debug bypass, both entry points must agree
    if !config.allow_debug_checksum_bypass {
        assert_eq!(is_valid(input, config.allow_temporary), result.is_ok());
    }

    if let Ok(code) = result {
        assert_eq!(code.as_str().len(), HETU_LENGTH);
        assert!(code.as_str().eq_ignore_ascii_case(input));
        match code.kind() {
            IndividualNumberKind::Permanent => assert!((2..=899).contains(&code.individual_number())),
            IndividualNumberKind::Temporary => {
                assert!(config.allow_temporary);
                assert!((900..=999).contains(&code.individual_number()));
            }
            IndividualNumberKind::DebugFixture => {
                assert!(config.allow_debug_checksum_bypass);
                assert!(code.as_str().ends_with("0000"));
            }
        }
    }
}
