//! Static app catalog and the session's mock transaction.

use heapless::String;

use crate::{address::pseudo_hash, text_policy::truncate_middle};

pub const APP_COUNT: usize = 3;
/// Fits the longest prefix plus the longest generated body.
pub const ADDRESS_BYTES: usize = 48;
pub const TX_FIELD_BYTES: usize = 32;

pub type AddressString = String<ADDRESS_BYTES>;
pub type TxField = String<TX_FIELD_BYTES>;

const TX_TAG: &str = "tx";
const TX_TO_PREFIX: &str = "0x";
const TX_TO_BODY_LEN: usize = 40;
const TX_TO_HEAD: usize = 8;
const TX_TO_TAIL: usize = 6;

/// Identifies one entry of [`APPS`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AppId {
    Bitcoin,
    Ethereum,
    Solana,
}

impl AppId {
    pub const fn index(self) -> u8 {
        match self {
            Self::Bitcoin => 0,
            Self::Ethereum => 1,
            Self::Solana => 2,
        }
    }

    /// Out-of-range indices map to the last entry.
    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Bitcoin,
            1 => Self::Ethereum,
            _ => Self::Solana,
        }
    }

    pub fn app(self) -> &'static WalletApp {
        &APPS[self.index() as usize]
    }
}

/// One installed coin app.
#[derive(Debug, Eq, PartialEq)]
pub struct WalletApp {
    pub id: AppId,
    /// Namespace tag mixed into the address hash.
    pub key: &'static str,
    pub name: &'static str,
    pub currency: &'static str,
    /// Display precision only.
    pub decimals: u8,
    pub prefix: &'static str,
    pub body_len: usize,
}

impl WalletApp {
    pub const fn address_len(&self) -> usize {
        self.prefix.len() + self.body_len
    }

    /// Fabricates this app's receive address for `seed`.
    pub fn derive_address(&self, seed: &str) -> AddressString {
        let mut out = AddressString::new();
        let _ = out.push_str(self.prefix);
        let _ = out.push_str(&pseudo_hash(seed, self.key, self.body_len));
        out
    }
}

pub static APPS: [WalletApp; APP_COUNT] = [
    WalletApp {
        id: AppId::Bitcoin,
        key: "btc",
        name: "Bitcoin",
        currency: "BTC",
        decimals: 8,
        prefix: "bc1",
        body_len: 36,
    },
    WalletApp {
        id: AppId::Ethereum,
        key: "eth",
        name: "Ethereum",
        currency: "ETH",
        decimals: 18,
        prefix: "0x",
        body_len: 40,
    },
    WalletApp {
        id: AppId::Solana,
        key: "sol",
        name: "Solana",
        currency: "SOL",
        decimals: 9,
        prefix: "",
        body_len: 44,
    },
];

/// Pages of the transaction review flow, in order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TxStep {
    To,
    Amount,
    Fee,
    Network,
    Sign,
}

impl TxStep {
    pub const COUNT: u8 = 5;

    pub fn from_index(index: u8) -> Self {
        match index {
            0 => Self::To,
            1 => Self::Amount,
            2 => Self::Fee,
            3 => Self::Network,
            _ => Self::Sign,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::To => "To",
            Self::Amount => "Amount",
            Self::Fee => "Fee",
            Self::Network => "Network",
            Self::Sign => "Sign",
        }
    }
}

/// Transaction shown for approval; built once per session.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MockTransaction {
    pub to: TxField,
    pub amount: &'static str,
    pub fee: &'static str,
    pub network: &'static str,
}

impl MockTransaction {
    pub fn from_seed(seed: &str) -> Self {
        let mut recipient = AddressString::new();
        let _ = recipient.push_str(TX_TO_PREFIX);
        let _ = recipient.push_str(&pseudo_hash(seed, TX_TAG, TX_TO_BODY_LEN));

        Self {
            to: truncate_middle(&recipient, TX_TO_HEAD, TX_TO_TAIL),
            amount: "0.0421",
            fee: "0.0003",
            network: "Mainnet (mock)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::address::HASH_ALPHABET;
    use proptest::prelude::*;

    #[test]
    fn catalog_ids_match_positions() {
        for (index, app) in APPS.iter().enumerate() {
            assert_eq!(app.id.index() as usize, index);
            assert_eq!(AppId::from_index(index as u8), app.id);
        }
    }

    #[test]
    fn addresses_have_configured_shape() {
        for app in APPS.iter() {
            let address = app.derive_address("session-seed");
            assert_eq!(address.len(), app.address_len());
            assert!(address.starts_with(app.prefix));
            let body = &address[app.prefix.len()..];
            assert_eq!(body.len(), app.body_len);
            assert!(body.bytes().all(|b| HASH_ALPHABET.contains(&b)));
        }

        assert_eq!(AppId::Bitcoin.app().body_len, 36);
        assert_eq!(AppId::Bitcoin.app().prefix.len(), 3);
        assert_eq!(AppId::Ethereum.app().body_len, 40);
        assert_eq!(AppId::Solana.app().address_len(), 44);
    }

    #[test]
    fn address_is_stable_per_seed() {
        let app = AppId::Ethereum.app();
        assert_eq!(app.derive_address("abc"), app.derive_address("abc"));
        assert_ne!(app.derive_address("abc"), app.derive_address("abd"));
    }

    #[test]
    fn mock_transaction_truncates_recipient() {
        let tx = MockTransaction::from_seed("abc");
        assert!(tx.to.starts_with("0x"));
        assert!(tx.to.contains('…'));
        assert_eq!(tx.to.chars().count(), TX_TO_HEAD + 1 + TX_TO_TAIL);
        assert_eq!(tx, MockTransaction::from_seed("abc"));
    }

    proptest! {
        #[test]
        fn every_app_derives_a_well_formed_address(seed in ".{0,64}") {
            for app in APPS.iter() {
                let address = app.derive_address(&seed);
                prop_assert_eq!(&address, &app.derive_address(&seed));
                prop_assert_eq!(address.len(), app.address_len());
                prop_assert!(address.starts_with(app.prefix));
                let body = &address[app.prefix.len()..];
                prop_assert!(body.bytes().all(|b| HASH_ALPHABET.contains(&b)));
            }
        }
    }
}
