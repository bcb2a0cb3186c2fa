use rand::rngs::StdRng;
use rand::SeedableRng;

/// Independent random streams derived from one employee's external id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RngStream {
    Profile,
    Duty,
}

impl RngStream {
    fn salt(self) -> u64 {
        match self {
            RngStream::Profile => 0,
            RngStream::Duty => 0x6475_7479_0000_0000,
        }
    }
}

/// Same external id and stream always give the same sequence, regardless of
/// how many other employees were generated before it.
pub fn employee_rng(external_id: i64, stream: RngStream) -> StdRng {
    StdRng::seed_from_u64(external_id as u64 ^ stream.salt())
}
