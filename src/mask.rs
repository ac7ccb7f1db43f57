//! Input masks applied on every keystroke.
//!
//! Each mask keeps only ASCII digits, truncates to the field's digit budget
//! and punctuates progressively, so a partially typed value shows only the
//! separators its digits have reached.

pub const CNPJ_DIGITS: usize = 14;
pub const PHONE_DIGITS: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    /// `DD.DDD.DDD/DDDD-DD`
    Cnpj,
    /// `(DD) DDDD-DDDD` for landlines, `(DD) DDDDD-DDDD` for mobiles.
    Phone,
}

impl Mask {
    pub fn apply(self, raw: &str) -> String {
        match self {
            Mask::Cnpj => mask_cnpj(raw),
            Mask::Phone => mask_phone(raw),
        }
    }
}

pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

fn truncated_digits(raw: &str, max: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(max).collect()
}

pub fn mask_cnpj(raw: &str) -> String {
    let d = truncated_digits(raw, CNPJ_DIGITS);
    // Only ASCII digits remain, so byte slicing is safe.
    match d.len() {
        0..=2 => d,
        3..=5 => format!("{}.{}", &d[..2], &d[2..]),
        6..=8 => format!("{}.{}.{}", &d[..2], &d[2..5], &d[5..]),
        9..=12 => format!("{}.{}.{}/{}", &d[..2], &d[2..5], &d[5..8], &d[8..]),
        _ => format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        ),
    }
}

pub fn mask_phone(raw: &str) -> String {
    let d = truncated_digits(raw, PHONE_DIGITS);
    match d.len() {
        0..=2 => d,
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "12345678000195";

    #[test]
    fn cnpj_progressive_formatting() {
        let expected = [
            "",
            "1",
            "12",
            "12.3",
            "12.34",
            "12.345",
            "12.345.6",
            "12.345.67",
            "12.345.678",
            "12.345.678/0",
            "12.345.678/00",
            "12.345.678/000",
            "12.345.678/0001",
            "12.345.678/0001-9",
            "12.345.678/0001-95",
        ];
        for (len, want) in expected.iter().enumerate() {
            assert_eq!(mask_cnpj(&SAMPLE[..len]), *want, "length {len}");
        }
    }

    const DIGIT_SAMPLES: [&str; 4] = [
        "12345678000195",
        "00000000000000",
        "98765432109876",
        "11222333000181",
    ];

    /// Interleaves non-digit noise between the digits of `digits`.
    fn noisy(digits: &str) -> String {
        digits
            .chars()
            .enumerate()
            .map(|(i, c)| match i % 4 {
                0 => format!("{c}"),
                1 => format!(" {c}"),
                2 => format!("-{c}/"),
                _ => format!("a{c}."),
            })
            .collect()
    }

    #[test]
    fn cnpj_mask_round_trips_digits_for_every_length() {
        for sample in DIGIT_SAMPLES {
            for len in 0..=CNPJ_DIGITS {
                let raw = &sample[..len];
                assert_eq!(digits_only(&mask_cnpj(raw)), raw, "{raw}");
                assert_eq!(mask_cnpj(&noisy(raw)), mask_cnpj(raw), "noisy {raw}");
            }
        }
    }

    #[test]
    fn phone_mask_round_trips_digits_for_every_length() {
        for sample in DIGIT_SAMPLES {
            for len in 0..=PHONE_DIGITS {
                let raw = &sample[..len];
                assert_eq!(digits_only(&mask_phone(raw)), raw, "{raw}");
                assert_eq!(mask_phone(&noisy(raw)), mask_phone(raw), "noisy {raw}");
            }
        }
    }

    #[test]
    fn cnpj_truncates_and_strips_noise() {
        assert_eq!(
            mask_cnpj("12.345.678/0001-95 and more 777"),
            "12.345.678/0001-95"
        );
        assert_eq!(mask_cnpj("ab12"), "12");
    }

    #[test]
    fn cnpj_reformats_already_masked_input() {
        let once = mask_cnpj("123456780001");
        assert_eq!(mask_cnpj(&format!("{once}9")), "12.345.678/0001-9");
    }

    #[test]
    fn phone_landline_and_mobile() {
        assert_eq!(mask_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(mask_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn full_length_strings_use_full_templates() {
        for sample in DIGIT_SAMPLES {
            let d = sample.as_bytes();
            let s = |r: std::ops::Range<usize>| std::str::from_utf8(&d[r]).unwrap();

            let landline = &sample[..10];
            assert_eq!(
                mask_phone(&noisy(landline)),
                format!("({}) {}-{}", s(0..2), s(2..6), s(6..10))
            );
            let mobile = &sample[..11];
            assert_eq!(
                mask_phone(&noisy(mobile)),
                format!("({}) {}-{}", s(0..2), s(2..7), s(7..11))
            );
            assert_eq!(
                mask_cnpj(&noisy(sample)),
                format!(
                    "{}.{}.{}/{}-{}",
                    s(0..2),
                    s(2..5),
                    s(5..8),
                    s(8..12),
                    s(12..14)
                )
            );
        }
    }

    #[test]
    fn phone_partial_formats() {
        assert_eq!(mask_phone("1"), "1");
        assert_eq!(mask_phone("11"), "11");
        assert_eq!(mask_phone("119"), "(11) 9");
        assert_eq!(mask_phone("119876"), "(11) 9876");
        assert_eq!(mask_phone("1198765"), "(11) 9876-5");
        assert_eq!(mask_phone("119876543"), "(11) 9876-543");
    }

    #[test]
    fn phone_truncates_to_eleven_digits() {
        assert_eq!(mask_phone("(11) 98765-43210"), "(11) 98765-4321");
        assert_eq!(digits_only(&mask_phone("119876543219")), "11987654321");
    }

    #[test]
    fn non_ascii_digits_are_dropped() {
        assert_eq!(digits_only("١٢3"), "3");
        assert_eq!(Mask::Phone.apply("٣٣"), "");
    }
}
