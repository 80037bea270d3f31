use lazyseq_core::{Linear, SequenceError};
use std::str::FromStr;

/// `first,stride,bound` as given on the command line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triple {
    pub first: f64,
    pub stride: f64,
    pub bound: f64,
}

impl Triple {
    /// The arithmetic progression described by this triple
    pub fn linear(&self) -> lazyseq_core::Result<Linear<f64>> {
        Linear::try_new(self.first, self.stride, self.bound)
    }
}

impl FromStr for Triple {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        let &[first, stride, bound] = parts.as_slice() else {
            return Err(SequenceError::invalid_triple(s));
        };
        let number = |part: &str| {
            part.parse::<f64>()
                .map_err(|_| SequenceError::invalid_triple(s))
        };
        Ok(Triple {
            first: number(first)?,
            stride: number(stride)?,
            bound: number(bound)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazyseq_core::Sequence;

    #[test]
    fn test_parse_triple() {
        let triple: Triple = "8,-1,1".parse().unwrap();
        assert_eq!(
            triple,
            Triple {
                first: 8.0,
                stride: -1.0,
                bound: 1.0
            }
        );

        let triple: Triple = " 0.5 , 0.25,2 ".parse().unwrap();
        assert_eq!(triple.stride, 0.25);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            "1,2".parse::<Triple>(),
            Err(SequenceError::invalid_triple("1,2"))
        );
        assert!("1,2,3,4".parse::<Triple>().is_err());
        assert!("a,b,c".parse::<Triple>().is_err());
        assert!("".parse::<Triple>().is_err());
    }

    #[test]
    fn test_linear_from_triple() {
        let seq = "0,2,20".parse::<Triple>().unwrap().linear().unwrap();
        assert_eq!(seq.size(), 11);

        let zero = "1,0,5".parse::<Triple>().unwrap().linear();
        assert_eq!(zero.unwrap_err(), SequenceError::ZeroStride);
    }
}
