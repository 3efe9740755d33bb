//! Translation between human-readable blade names and bitmasks.
//!
//! Canonical names (`e`, `e1`, `e12`, `eoi`, ...) are the prefix followed by
//! the vectors' subscripts in declared order. Parsing additionally accepts any
//! permutation of the subscripts and reports the sign of that permutation, so
//! `e21` resolves to `-e12`. Multi-character subscripts are resolved by trying
//! every decomposition of the name.

use crate::error::ParseError;
use crate::signature::{Signature, BLADE_PREFIX};
use crate::types::Bitmask;

/// Decompose `name` into declared subscripts.
///
/// Returns the blade bitmask and the sign of the permutation that sorts the
/// subscripts into declared order.
///
/// # Errors
///
/// - [`ParseError::MissingPrefix`] if `name` does not start with `e`
/// - [`ParseError::RepeatedVector`] if the only decompositions reuse a vector
/// - [`ParseError::UnknownSubscript`] if no decomposition exists
/// - [`ParseError::Ambiguous`] if decompositions disagree on blade or sign
pub fn parse_blade_name(signature: &Signature, name: &str) -> Result<(Bitmask, i8), ParseError> {
    let body = name
        .strip_prefix(BLADE_PREFIX)
        .ok_or_else(|| ParseError::MissingPrefix {
            name: name.to_string(),
        })?;

    let mut search = Search {
        signature,
        body,
        stack: Vec::new(),
        outcomes: Vec::new(),
        repeated: None,
        furthest: 0,
    };
    search.run(0);

    match search.outcomes.as_slice() {
        [] => match search.repeated {
            Some(position) => Err(ParseError::RepeatedVector {
                name: name.to_string(),
                label: signature.vector(position).label.clone(),
            }),
            None => Err(ParseError::UnknownSubscript {
                name: name.to_string(),
                remainder: body[search.furthest..].to_string(),
            }),
        },
        [only] => Ok(*only),
        [first, rest @ ..] => {
            if rest.iter().all(|o| o == first) {
                Ok(*first)
            } else {
                Err(ParseError::Ambiguous {
                    name: name.to_string(),
                })
            }
        }
    }
}

/// Sign of the permutation that sorts `positions` ascending.
pub fn permutation_sign(positions: &[usize]) -> i8 {
    let mut inversions = 0usize;
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            if positions[i] > positions[j] {
                inversions += 1;
            }
        }
    }
    if inversions % 2 == 0 {
        1
    } else {
        -1
    }
}

struct Search<'a> {
    signature: &'a Signature,
    body: &'a str,
    stack: Vec<usize>,
    outcomes: Vec<(Bitmask, i8)>,
    repeated: Option<usize>,
    furthest: usize,
}

impl Search<'_> {
    fn run(&mut self, at: usize) {
        self.furthest = self.furthest.max(at);
        if at == self.body.len() {
            let mask = self.stack.iter().fold(0, |m, &p| m | (1 << p));
            let outcome = (mask, permutation_sign(&self.stack));
            if !self.outcomes.contains(&outcome) {
                self.outcomes.push(outcome);
            }
            return;
        }

        let rest = &self.body[at..];
        for (position, v) in self.signature.vectors().iter().enumerate() {
            if !rest.starts_with(v.label.as_str()) {
                continue;
            }
            if self.stack.contains(&position) {
                self.repeated.get_or_insert(position);
                continue;
            }
            self.stack.push(position);
            self.run(at + v.label.len());
            self.stack.pop();
        }
    }
}
