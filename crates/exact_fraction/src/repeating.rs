use std::collections::HashMap;

use tracing::trace;

use crate::error::Result;
use crate::fraction::Fraction;
use crate::int::CheckedInt;

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

impl<I: CheckedInt> Fraction<I> {
    /// Renders the value as `±I.F(R)` in `radix` (anything outside `2..=36` falls back to 10).
    pub fn to_repeating_digit_string(&self, radix: u32, force_repeating: bool) -> Result<String> {
        let radix = if (2..=36).contains(&radix) { radix } else { 10 };
        let max_digit = DIGITS[radix as usize - 1] as char;

        if self.is_zero() {
            return Ok(if force_repeating { "0.(0)" } else { "0.0" }.to_string());
        }
        let sign = if self.is_negative() { "-" } else { "" };

        if self.is_integer() {
            if !force_repeating {
                return Ok(format!("{}.0", self.numerator.to_str_radix(radix)));
            }
            // N = (N - 1) + 0.(max digit), stepping toward zero before taking the magnitude.
            let toward_zero = if self.is_negative() {
                self.numerator.try_add(&I::one())?
            } else {
                self.numerator.try_sub(&I::one())?
            };
            let below = toward_zero.try_abs()?;
            return Ok(format!("{sign}{}.({max_digit})", below.to_str_radix(radix)));
        }

        let numerator = self.numerator.try_abs()?;
        let (whole, mut remainder) = numerator.try_div_rem(&self.denominator)?;
        let radix_int = I::from_i128(i128::from(radix))?;

        let mut digits: Vec<u8> = Vec::new();
        let mut seen: HashMap<I, usize> = HashMap::new();
        let cycle_start = loop {
            if remainder.is_zero() {
                break None;
            }
            if let Some(&start) = seen.get(&remainder) {
                break Some(start);
            }
            seen.insert(remainder.clone(), digits.len());
            let (digit, next) = remainder
                .try_mul(&radix_int)?
                .try_div_rem(&self.denominator)?;
            digits.push(digit_value(&digit));
            remainder = next;
        };
        trace!(
            digits = digits.len(),
            cycle_start = ?cycle_start,
            radix,
            "long division finished"
        );

        let whole_digits = whole.to_str_radix(radix);
        let rendered = match cycle_start {
            Some(start) => format!(
                "{whole_digits}.{}({})",
                render_digits(&digits[..start]),
                render_digits(&digits[start..])
            ),
            None if force_repeating => {
                let (whole_digits, fraction_digits) = decrement(&whole_digits, &digits, radix);
                format!("{whole_digits}.{fraction_digits}({max_digit})")
            }
            None => format!("{whole_digits}.{}", render_digits(&digits)),
        };
        Ok(format!("{sign}{rendered}"))
    }
}

fn digit_value<I: CheckedInt>(digit: &I) -> u8 {
    // Always below the radix, so at most 35.
    digit.to_i128().and_then(|value| u8::try_from(value).ok()).unwrap_or(0)
}

fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|&digit| DIGITS[digit as usize] as char).collect()
}

/// Subtracts one unit in the last fractional place from `whole.digits`, keeping the number of
/// fractional digits. The value is a positive terminating expansion, so there is always a
/// non-zero digit to borrow from.
fn decrement(whole: &str, fraction: &[u8], radix: u32) -> (String, String) {
    let mut all: Vec<u8> = whole
        .bytes()
        .map(|byte| DIGITS.iter().position(|&d| d == byte).unwrap_or(0) as u8)
        .chain(fraction.iter().copied())
        .collect();
    let top = (radix - 1) as u8;
    for digit in all.iter_mut().rev() {
        if *digit > 0 {
            *digit -= 1;
            break;
        }
        *digit = top;
    }
    let split = all.len() - fraction.len();
    let mut whole_digits = render_digits(&all[..split]);
    let trimmed = whole_digits.trim_start_matches('0');
    whole_digits = if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() };
    (whole_digits, render_digits(&all[split..]))
}
