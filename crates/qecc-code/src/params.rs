use qecc_core::{ErrorInfo, QeccError};
use serde::{Deserialize, Serialize};

/// Smallest block parameter accepted by the constructor.
pub const MIN_BLOCK_PARAMETER: usize = 3;

/// Validated `(n, k, r)` triple describing a randomized stabilizer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawParameters", into = "RawParameters")]
pub struct CodeParameters {
    n: usize,
    k: usize,
    r: usize,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawParameters {
    n: usize,
    k: usize,
    r: usize,
}

impl TryFrom<RawParameters> for CodeParameters {
    type Error = QeccError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        CodeParameters::new(raw.n, raw.k, raw.r)
    }
}

impl From<CodeParameters> for RawParameters {
    fn from(params: CodeParameters) -> Self {
        Self {
            n: params.n,
            k: params.k,
            r: params.r,
        }
    }
}

fn rejected(code: &str, message: &str, n: usize, k: usize, r: usize) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("n", n.to_string())
        .with_context("k", k.to_string())
        .with_context("r", r.to_string())
}

impl CodeParameters {
    /// Validates and wraps the physical qubit count `n`, the logical qubit
    /// count `k` and the block parameter `r`.
    ///
    /// Requires `n >= 1`, `k < n` and `3 <= r <= n - k`.
    pub fn new(n: usize, k: usize, r: usize) -> Result<Self, QeccError> {
        if n == 0 {
            let info = rejected("empty-code", "code needs at least one qubit", n, k, r);
            return Err(QeccError::Params(info));
        }
        if k >= n {
            return Err(QeccError::Params(rejected(
                "logical-exceeds-physical",
                "logical qubit count must be below the physical qubit count",
                n,
                k,
                r,
            )));
        }
        if r < MIN_BLOCK_PARAMETER {
            let info = rejected(
                "block-parameter-too-small",
                "block parameter below the supported minimum",
                n,
                k,
                r,
            )
            .with_hint(format!("use r >= {MIN_BLOCK_PARAMETER}"));
            return Err(QeccError::Params(info));
        }
        if r > n - k {
            return Err(QeccError::Params(rejected(
                "block-parameter-too-large",
                "block parameter exceeds the number of stabilizers n - k",
                n,
                k,
                r,
            )));
        }
        Ok(Self { n, k, r })
    }

    /// Physical qubit count.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Logical qubit count.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Block parameter.
    pub fn r(&self) -> usize {
        self.r
    }

    /// Number of stabilizer generators, `n - k`.
    pub fn stabilizers(&self) -> usize {
        self.n - self.k
    }

    /// Short label such as `n5-k1-r3`.
    pub fn label(&self) -> String {
        format!("n{}-k{}-r{}", self.n, self.k, self.r)
    }
}
