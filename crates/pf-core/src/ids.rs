use core::fmt;

/// Monotonic allocator for string identifiers.
///
/// Issues `"{prefix}{n}"` for an ever-increasing `n`. The counter is never
/// decremented or reused, so every id issued by one sequence is unique and
/// strictly greater (numerically) than all ids issued before it, no matter
/// how many of the owning objects have since been deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSeq {
    prefix: &'static str,
    next: u32,
}

impl IdSeq {
    /// Create a sequence whose first issued id will be `"{prefix}{first}"`.
    pub fn new(prefix: &'static str, first: u32) -> Self {
        Self {
            prefix,
            next: first,
        }
    }

    /// Issue the next id and advance the counter.
    pub fn issue(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }

    /// The numeric value the next `issue` call will use.
    pub fn peek(&self) -> u32 {
        self.next
    }
}

impl fmt::Display for IdSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_in_order() {
        let mut seq = IdSeq::new("", 1);
        assert_eq!(seq.issue(), "1");
        assert_eq!(seq.issue(), "2");
        assert_eq!(seq.issue(), "3");
        assert_eq!(seq.peek(), 4);
    }

    #[test]
    fn prefix_and_seed() {
        let mut seq = IdSeq::new("e", 6);
        assert_eq!(seq.issue(), "e6");
        assert_eq!(seq.issue(), "e7");
    }

    #[test]
    fn ids_are_pairwise_distinct() {
        let mut seq = IdSeq::new("n", 1);
        let ids: Vec<String> = (0..100).map(|_| seq.issue()).collect();
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn strictly_increasing(seed in 1u32..10_000, count in 1usize..200) {
                let mut seq = IdSeq::new("", seed);
                let mut prev: Option<u32> = None;
                for _ in 0..count {
                    let id = seq.issue();
                    let n: u32 = id.parse().unwrap();
                    if let Some(p) = prev {
                        prop_assert!(n > p);
                    }
                    prev = Some(n);
                }
            }
        }
    }
}
