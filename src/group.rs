//! Group parameters and the registry of well-known MODP groups.

use std::fmt;

use num_bigint::BigUint;
use once_cell::sync::Lazy;

use crate::error::{ParameterError, Result};
use crate::parse::parse_hex_digits;
use crate::primality::is_prime;
use crate::primitive_root::is_primitive_root;
use crate::vectors::{self, TestVectorSet};

/// A validated `(prime, generator)` pair.
///
/// The only way to obtain one is [`GroupParameters::new`], so holding a value means
/// the prime passed [`is_prime`] and the generator lies in `[2, prime - 1]` and passed
/// [`is_primitive_root`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupParameters {
    prime: BigUint,
    generator: BigUint,
}

impl GroupParameters {
    /// Validates and wraps a group.
    ///
    /// # Errors
    /// [`Error::InvalidParameter`](crate::Error::InvalidParameter) if the prime or the
    /// generator is rejected.
    pub fn new(prime: BigUint, generator: BigUint) -> Result<Self> {
        validate(&prime, &generator)?;
        Ok(GroupParameters { prime, generator })
    }

    pub fn prime(&self) -> &BigUint {
        &self.prime
    }

    pub fn generator(&self) -> &BigUint {
        &self.generator
    }
}

/// Checks `prime` and `generator` in the order a caller would report them.
pub(crate) fn validate(prime: &BigUint, generator: &BigUint) -> Result<()> {
    if !is_prime(prime) {
        return Err(ParameterError::NotPrime(prime.clone()).into());
    }
    if *generator < BigUint::from(2u32) || generator >= prime {
        return Err(ParameterError::GeneratorOutOfRange {
            generator: generator.clone(),
            prime: prime.clone(),
        }
        .into());
    }
    if !is_primitive_root(generator, prime) {
        return Err(ParameterError::NotPrimitiveRoot {
            root: generator.clone(),
            prime: prime.clone(),
        }
        .into());
    }
    Ok(())
}

/// Standardized groups that ship with the crate.
///
/// The default is the RFC 5114 2048-bit group, which is also the group the canonical
/// known-answer vectors are computed over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum WellKnownGroup {
    /// RFC 5114 section 2.2: 2048-bit MODP group with a 224-bit prime order subgroup.
    #[default]
    #[value(name = "rfc5114-2048")]
    Rfc5114Modp2048,
    /// RFC 5114 section 2.1: 1024-bit MODP group with a 160-bit prime order subgroup.
    #[value(name = "rfc5114-1024")]
    Rfc5114Modp1024,
    /// RFC 3526 section 3: 2048-bit MODP group, generator 2.
    #[value(name = "rfc3526-2048")]
    Rfc3526Modp2048,
}

impl WellKnownGroup {
    pub const ALL: [WellKnownGroup; 3] = [
        WellKnownGroup::Rfc5114Modp2048,
        WellKnownGroup::Rfc5114Modp1024,
        WellKnownGroup::Rfc3526Modp2048,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WellKnownGroup::Rfc5114Modp2048 => "rfc5114-2048",
            WellKnownGroup::Rfc5114Modp1024 => "rfc5114-1024",
            WellKnownGroup::Rfc3526Modp2048 => "rfc3526-2048",
        }
    }

    /// The group's parameters, parsed once on first use.
    pub fn parameters(self) -> &'static GroupParameters {
        match self {
            WellKnownGroup::Rfc5114Modp2048 => &RFC5114_2048,
            WellKnownGroup::Rfc5114Modp1024 => &RFC5114_1024,
            WellKnownGroup::Rfc3526Modp2048 => &RFC3526_2048,
        }
    }

    /// Known-answer vectors for the group, if any are bundled.
    pub fn test_vectors(self) -> Option<&'static TestVectorSet> {
        match self {
            WellKnownGroup::Rfc5114Modp2048 => Some(vectors::rfc5114_2048()),
            WellKnownGroup::Rfc5114Modp1024 => Some(vectors::rfc5114_1024()),
            WellKnownGroup::Rfc3526Modp2048 => None,
        }
    }
}

impl fmt::Display for WellKnownGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// The hex constants below are covered by the tests in this module.
fn builtin(prime: &str, generator: &str) -> GroupParameters {
    let prime = parse_hex_digits(prime).expect("built-in prime is valid hex");
    let generator = parse_hex_digits(generator).expect("built-in generator is valid hex");
    GroupParameters::new(prime, generator).expect("built-in group passes validation")
}

static RFC5114_2048: Lazy<GroupParameters> =
    Lazy::new(|| builtin(RFC5114_2048_PRIME, RFC5114_2048_GENERATOR));
static RFC5114_1024: Lazy<GroupParameters> =
    Lazy::new(|| builtin(RFC5114_1024_PRIME, RFC5114_1024_GENERATOR));
static RFC3526_2048: Lazy<GroupParameters> = Lazy::new(|| builtin(RFC3526_2048_PRIME, "02"));

const RFC5114_1024_PRIME: &str = "\
    B10B8F96 A080E01D DE92DE5E AE5D54EC 52C99FBC FB06A3C6 9A6A9DCA 52D23B61 \
    6073E286 75A23D18 9838EF1E 2EE652C0 13ECB4AE A9061123 24975C3C D49B83BF \
    ACCBDD7D 90C4BD70 98488E9C 219A7372 4EFFD6FA E5644738 FAA31A4F F55BCCC0 \
    A151AF5F 0DC8B4BD 45BF37DF 365C1A65 E68CFDA7 6D4DA708 DF1FB2BC 2E4A4371";

const RFC5114_1024_GENERATOR: &str = "\
    A4D1CBD5 C3FD3412 6765A442 EFB99905 F8104DD2 58AC507F D6406CFF 14266D31 \
    266FEA1E 5C41564B 777E690F 5504F213 160217B4 B01B886A 5E91547F 9E2749F4 \
    D7FBD7D3 B9A92EE1 909D0D22 63F80A76 A6A24C08 7A091F53 1DBF0A01 69B6A28A \
    D662A4D1 8E73AFA3 2D779D59 18D08BC8 858F4DCE F97C2A24 855E6EEB 22B3B2E5";

const RFC5114_2048_PRIME: &str = "\
    AD107E1E 9123A9D0 D660FAA7 9559C51F A20D64E5 683B9FD1 B54B1597 B61D0A75 \
    E6FA141D F95A56DB AF9A3C40 7BA1DF15 EB3D688A 309C180E 1DE6B85A 1274A0A6 \
    6D3F8152 AD6AC212 9037C9ED EFDA4DF8 D91E8FEF 55B7394B 7AD5B7D0 B6C12207 \
    C9F98D11 ED34DBF6 C6BA0B2C 8BBC27BE 6A00E0A0 B9C49708 B3BF8A31 70918836 \
    81286130 BC8985DB 1602E714 415D9330 278273C7 DE31EFDC 7310F712 1FD5A074 \
    15987D9A DC0A486D CDF93ACC 44328387 315D75E1 98C641A4 80CD86A1 B9E587E8 \
    BE60E69C C928B2B9 C52172E4 13042E9B 23F10B0E 16E79763 C9B53DCF 4BA80A29 \
    E3FB73C1 6B8E75B9 7EF363E2 FFA31F71 CF9DE538 4E71B81C 0AC4DFFE 0C10E64F";

const RFC5114_2048_GENERATOR: &str = "\
    AC4032EF 4F2D9AE3 9DF30B5C 8FFDAC50 6CDEBE7B 89998CAF 74866A08 CFE4FFE3 \
    A6824A4E 10B9A6F0 DD921F01 A70C4AFA AB739D77 00C29F52 C57DB17C 620A8652 \
    BE5E9001 A8D66AD7 C1766910 1999024A F4D02727 5AC1348B B8A762D0 521BC98A \
    E2471504 22EA1ED4 09939D54 DA7460CD B5F6C6B2 50717CBE F180EB34 118E98D1 \
    19529A45 D6F83456 6E3025E3 16A330EF BB77A86F 0C1AB15B 051AE3D4 28C8F8AC \
    B70A8137 150B8EEB 10E183ED D19963DD D9E263E4 770589EF 6AA21E7F 5F2FF381 \
    B539CCE3 409D13CD 566AFBB4 8D6C0191 81E1BCFE 94B30269 EDFE72FE 9B6AA4BD \
    7B5A0F1C 71CFFF4C 19C418E1 F6EC0179 81BC087F 2A7065B3 84B890D3 191F2BFA";

const RFC3526_2048_PRIME: &str = "\
    FFFFFFFF FFFFFFFF C90FDAA2 2168C234 C4C6628B 80DC1CD1 29024E08 8A67CC74 \
    020BBEA6 3B139B22 514A0879 8E3404DD EF9519B3 CD3A431B 302B0A6D F25F1437 \
    4FE1356D 6D51C245 E485B576 625E7EC6 F44C42E9 A637ED6B 0BFF5CB6 F406B7ED \
    EE386BFB 5A899FA5 AE9F2411 7C4B1FE6 49286651 ECE45B3D C2007CB8 A163BF05 \
    98DA4836 1C55D39A 69163FA8 FD24CF5F 83655D23 DCA3AD96 1C62F356 208552BB \
    9ED52907 7096966D 670C354E 4ABC9804 F1746C08 CA18217C 32905E46 2E36CE3B \
    E39E772C 180E8603 9B2783A2 EC07A28F B5C55DF0 6F4C52C9 DE2BCBF6 95581718 \
    3995497C EA956AE5 15D22618 98FA0510 15728E5A 8AACAA68 FFFFFFFF FFFFFFFF";
