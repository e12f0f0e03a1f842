use alloy_primitives::B256;
use serde::Serialize;

/// Definition of an EVM-compatible blockchain network.
#[derive(Debug, Clone, Serialize)]
pub struct EvmChain {
    pub chain_id: u64,
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
    pub explorer_url: &'static str,
    pub is_testnet: bool,
}

impl EvmChain {
    /// Block explorer page for a transaction on this chain.
    pub fn tx_url(&self, hash: &B256) -> String {
        format!("{}/tx/{hash}", self.explorer_url)
    }
}

/// Ethereum Mainnet (chain ID 1).
pub const ETHEREUM: EvmChain = EvmChain {
    chain_id: 1,
    name: "Ethereum",
    symbol: "ETH",
    decimals: 18,
    explorer_url: "https://etherscan.io",
    is_testnet: false,
};

/// Base (chain ID 8453).
pub const BASE: EvmChain = EvmChain {
    chain_id: 8453,
    name: "Base",
    symbol: "ETH",
    decimals: 18,
    explorer_url: "https://basescan.org",
    is_testnet: false,
};

/// Avalanche C-Chain (chain ID 43114).
pub const AVALANCHE: EvmChain = EvmChain {
    chain_id: 43114,
    name: "Avalanche C-Chain",
    symbol: "AVAX",
    decimals: 18,
    explorer_url: "https://snowtrace.io",
    is_testnet: false,
};

/// Sepolia Testnet (chain ID 11155111).
pub const SEPOLIA: EvmChain = EvmChain {
    chain_id: 11155111,
    name: "Sepolia",
    symbol: "ETH",
    decimals: 18,
    explorer_url: "https://sepolia.etherscan.io",
    is_testnet: true,
};

/// Base Sepolia Testnet (chain ID 84532).
pub const BASE_SEPOLIA: EvmChain = EvmChain {
    chain_id: 84532,
    name: "Base Sepolia",
    symbol: "ETH",
    decimals: 18,
    explorer_url: "https://sepolia.basescan.org",
    is_testnet: true,
};

/// Avalanche Fuji Testnet (chain ID 43113).
pub const AVALANCHE_FUJI: EvmChain = EvmChain {
    chain_id: 43113,
    name: "Avalanche Fuji",
    symbol: "AVAX",
    decimals: 18,
    explorer_url: "https://testnet.snowtrace.io",
    is_testnet: true,
};

/// All supported EVM chains.
const ALL_CHAINS: &[&EvmChain] = &[
    &ETHEREUM,
    &BASE,
    &AVALANCHE,
    &SEPOLIA,
    &BASE_SEPOLIA,
    &AVALANCHE_FUJI,
];

/// Chains enabled when no explicit list is configured.
pub const DEFAULT_CHAIN_IDS: &[u64] = &[
    SEPOLIA.chain_id,
    BASE_SEPOLIA.chain_id,
    AVALANCHE_FUJI.chain_id,
];

/// Returns the chain definition for a given chain ID, or `None` if unsupported.
pub fn get_chain(chain_id: u64) -> Option<&'static EvmChain> {
    ALL_CHAINS
        .iter()
        .find(|c| c.chain_id == chain_id)
        .copied()
}

/// Returns all supported EVM chain definitions.
pub fn supported_chains() -> Vec<&'static EvmChain> {
    ALL_CHAINS.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_sepolia() {
        let chain = get_chain(11155111).expect("Sepolia should be supported");
        assert_eq!(chain.name, "Sepolia");
        assert!(chain.is_testnet);
    }

    #[test]
    fn get_base_sepolia() {
        let chain = get_chain(84532).expect("Base Sepolia should be supported");
        assert_eq!(chain.name, "Base Sepolia");
        assert_eq!(chain.symbol, "ETH");
    }

    #[test]
    fn get_avalanche_fuji() {
        let chain = get_chain(43113).expect("Fuji should be supported");
        assert_eq!(chain.symbol, "AVAX");
        assert!(chain.is_testnet);
    }

    #[test]
    fn unsupported_chain_returns_none() {
        assert!(get_chain(999999).is_none());
    }

    #[test]
    fn default_chains_are_supported_testnets() {
        for id in DEFAULT_CHAIN_IDS {
            let chain = get_chain(*id).expect("default chain must be registered");
            assert!(chain.is_testnet, "{} should be a testnet", chain.name);
        }
    }

    #[test]
    fn supported_chains_includes_all() {
        assert_eq!(supported_chains().len(), 6);
    }

    #[test]
    fn all_chains_have_18_decimals() {
        for chain in supported_chains() {
            assert_eq!(chain.decimals, 18, "{} should have 18 decimals", chain.name);
        }
    }

    #[test]
    fn all_chains_have_https_explorer() {
        for chain in supported_chains() {
            assert!(
                chain.explorer_url.starts_with("https://") && !chain.explorer_url.ends_with('/'),
                "{} explorer_url should be an https base url",
                chain.name
            );
        }
    }

    #[test]
    fn tx_url_joins_explorer_and_hash() {
        let hash = B256::repeat_byte(0xab);
        let url = SEPOLIA.tx_url(&hash);
        assert_eq!(url, format!("https://sepolia.etherscan.io/tx/0x{}", "ab".repeat(32)));
    }
}
