//! Scam Catalog
//!
//! Hand-authored catalog of scam records grouped by category. Declaration
//! order is display order.

use crate::models::{RiskLevel, ScamCategory, ScamRecord};

pub const SCAM_CATEGORIES: &[ScamCategory] = &[
    ScamCategory {
        id: "keys",
        name: "Private Key & Seed Phrase",
        icon: "🔑",
        color: "text-emerald-400",
        scams: KEYS_SCAMS,
    },
    ScamCategory {
        id: "transaction",
        name: "Transaction & Address",
        icon: "🔁",
        color: "text-red-400",
        scams: TRANSACTION_SCAMS,
    },
    ScamCategory {
        id: "social",
        name: "Impersonation & Social",
        icon: "👤",
        color: "text-orange-400",
        scams: SOCIAL_SCAMS,
    },
    ScamCategory {
        id: "investment",
        name: "Investment & Trading",
        icon: "📈",
        color: "text-yellow-400",
        scams: INVESTMENT_SCAMS,
    },
    ScamCategory {
        id: "defi",
        name: "Smart Contract & DeFi",
        icon: "📜",
        color: "text-purple-400",
        scams: DEFI_SCAMS,
    },
    ScamCategory {
        id: "software",
        name: "Software & Infrastructure",
        icon: "🖥️",
        color: "text-blue-400",
        scams: SOFTWARE_SCAMS,
    },
    ScamCategory {
        id: "nft",
        name: "NFT-Specific",
        icon: "🖼️",
        color: "text-pink-400",
        scams: NFT_SCAMS,
    },
    ScamCategory {
        id: "centralized",
        name: "Centralized Platforms",
        icon: "🏦",
        color: "text-cyan-400",
        scams: CENTRALIZED_SCAMS,
    },
];

const KEYS_SCAMS: &[ScamRecord] = &[
    ScamRecord {
        id: 25,
        title: "Seed Phrase Phishing",
        short_desc: "Fake recovery or verification requests asking for your seed.",
        description: "Fake recovery or verification requests. Scammers try to trick you into revealing your seed phrase through fake security alerts or recovery processes.",
        how_it_works: &[
            "Scammer sends fake security alert or recovery email",
            "Directs to convincing phishing page",
            "Page asks for seed phrase to 'verify' or 'recover'",
            "Seed phrase is captured and funds drained",
        ],
        defense: &[
            "No legitimate service ever asks for your seed phrase",
            "Never enter seed phrases on any website",
            "Use hardware wallets for recovery processes",
            "Verify all communications through official channels",
        ],
        risk_level: RiskLevel::Critical,
        category: "keys",
    },
    ScamRecord {
        id: 26,
        title: "Fake Wallet Recovery Services",
        short_desc: "Scammers claiming to recover lost or stolen crypto.",
        description: "Scammers claiming to recover lost funds. They want upfront fees or wallet access, then disappear without recovering anything.",
        how_it_works: &[
            "Victim posts about lost funds online",
            "Scammer contacts offering recovery services",
            "Requests upfront fee or wallet access",
            "Takes payment and disappears",
        ],
        defense: &[
            "Cryptocurrency transactions are irreversible",
            "Recovery claims for stolen crypto are almost always false",
            "Upfront fees are a major red flag",
            "Legitimate recovery only possible with seed phrase",
        ],
        risk_level: RiskLevel::High,
        category: "keys",
    },
    ScamRecord {
        id: 27,
        title: "Cloud Backup Seed Theft",
        short_desc: "Seeds stolen from insecure cloud storage or backups.",
        description: "Seeds stolen from insecure backups. Attackers access cloud data to extract unencrypted seed phrases from photos or documents.",
        how_it_works: &[
            "User stores seed phrase in cloud storage, photos, or notes",
            "Attacker gains access to cloud account",
            "Searches for cryptocurrency-related files",
            "Extracts seed phrase and drains wallet",
        ],
        defense: &[
            "Never store seed phrases digitally or in plaintext",
            "Use offline, physical storage methods",
            "If digital backup needed, encrypt properly",
            "Use steel backup solutions for fire/water protection",
        ],
        risk_level: RiskLevel::Critical,
        category: "keys",
    },
];

const TRANSACTION_SCAMS: &[ScamRecord] = &[
    ScamRecord {
        id: 1,
        title: "Address Poisoning",
        short_desc: "Exploits how users copy wallet addresses from transaction history.",
        description: "A scam that exploits how users copy wallet addresses from transaction history. The scammer sends a tiny transaction from an address that visually resembles one you've interacted with.",
        how_it_works: &[
            "Scammer analyzes your on-chain transaction history",
            "Creates wallet address that visually resembles ones you've used",
            "Sends tiny transaction from the lookalike address",
            "Hopes you'll copy their address by mistake and send funds later",
        ],
        defense: &[
            "Never copy addresses from transaction history",
            "Always verify the entire address character by character",
            "Save trusted addresses explicitly in an address book",
            "Use ENS names cautiously and verify underlying addresses",
        ],
        risk_level: RiskLevel::Critical,
        category: "transaction",
    },
    ScamRecord {
        id: 2,
        title: "Clipboard Hijacking",
        short_desc: "Malware that silently alters copied wallet addresses.",
        description: "Malware that alters copied wallet addresses. When you copy a legitimate address, malware replaces it with the scammer's address in your clipboard.",
        how_it_works: &[
            "Malware infects your device through downloads or phishing",
            "Monitors clipboard for cryptocurrency address patterns",
            "Replaces copied addresses with scammer's address",
            "You paste and send funds unknowingly to the wrong address",
        ],
        defense: &[
            "Always double-check pasted addresses before confirming",
            "Use hardware wallets that display address for confirmation",
            "Avoid pirated software and suspicious downloads",
            "Keep your system clean with updated antivirus",
        ],
        risk_level: RiskLevel::Critical,
        category: "transaction",
    },
    ScamRecord {
        id: 3,
        title: "Vanity Address Impersonation",
        short_desc: "Addresses generated to look similar to legitimate ones.",
        description: "Addresses intentionally generated to look similar to legitimate ones. Scammers hope you'll only check the first/last characters and mistake their address for a trusted one.",
        how_it_works: &[
            "Scammer identifies target addresses (exchanges, projects)",
            "Uses vanity address generators to create similar-looking addresses",
            "Distributes fake address through phishing or social engineering",
            "Victims send funds after partial address verification",
        ],
        defense: &[
            "Don't rely on partial address matching",
            "Compare full addresses character by character",
            "Confirm large transfers through out-of-band communication",
            "Use address book features in your wallet",
        ],
        risk_level: RiskLevel::High,
        category: "transaction",
    },
    ScamRecord {
        id: 4,
        title: "Dusting Attacks",
        short_desc: "Tiny crypto amounts sent to track wallet behavior.",
        description: "Sending tiny amounts of crypto to many wallets. The scammer wants to track your wallet behavior, link identities, or trick you into interacting with malicious tokens.",
        how_it_works: &[
            "Scammer sends minuscule amounts to thousands of wallets",
            "Tracks when dust is moved to analyze wallet connections",
            "May include malicious tokens that trigger drains when interacted with",
            "Used for deanonymization or phishing preparation",
        ],
        defense: &[
            "Ignore unsolicited tokens in your wallet",
            "Don't interact with or try to sell unknown assets",
            "Use wallet privacy features when available",
            "Consider using multiple wallets for different purposes",
        ],
        risk_level: RiskLevel::Medium,
        category: "transaction",
    },
    ScamRecord {
        id: 5,
        title: "Transaction Replay Attacks",
        short_desc: "Reusing signed transactions on other blockchains.",
        description: "Reusing a signed transaction on another blockchain or fork. Scammers exploit chains without replay protection to execute your transaction twice, draining funds.",
        how_it_works: &[
            "Occurs during blockchain forks or on similar chains",
            "Scammer captures your signed transaction",
            "Replays the same transaction on another chain",
            "Funds are drained from your wallet on the other chain",
        ],
        defense: &[
            "Use wallets with built-in replay protection",
            "Be extra cautious during blockchain forks",
            "Avoid reusing signed transactions across chains",
            "Wait for official guidance during chain splits",
        ],
        risk_level: RiskLevel::High,
        category: "transaction",
    },
];

const SOCIAL_SCAMS: &[ScamRecord] = &[
    ScamRecord {
        id: 6,
        title: "Support Impersonation",
        short_desc: "Fake customer support accounts contacting users.",
        description: "Fake customer support accounts contacting users. The scammer pretends to help and tries to get you to share seed phrases, sign transactions, or visit phishing sites.",
        how_it_works: &[
            "Scammer monitors public support requests on social media",
            "Creates convincing fake support profile",
            "DMs victim offering to 'help' with their issue",
            "Requests seed phrase or directs to phishing site",
        ],
        defense: &[
            "Legitimate support NEVER DMs first",
            "Only use official support channels listed on the project's website",
            "Never share private keys or seed phrases with anyone",
            "Report impersonator accounts immediately",
        ],
        risk_level: RiskLevel::Critical,
        category: "social",
    },
    ScamRecord {
        id: 7,
        title: "Founder/Influencer Impersonation",
        short_desc: "Fake accounts posing as public crypto figures.",
        description: "Fake accounts posing as public figures. Scammers exploit trust and authority to push fake giveaways, tokens, or malicious links.",
        how_it_works: &[
            "Creates accounts mimicking famous crypto personalities",
            "Posts replies under viral tweets with fake giveaways",
            "Uses deepfakes or old footage in fake livestreams",
            "Promotes fake tokens or phishing links",
        ],
        defense: &[
            "Verify account handles carefully (look for subtle misspellings)",
            "Beware of replies under viral posts promoting giveaways",
            "Never trust unsolicited investment offers from 'celebrities'",
            "Check follower count, account age, and verification",
        ],
        risk_level: RiskLevel::High,
        category: "social",
    },
    ScamRecord {
        id: 8,
        title: "Romance Scams (Pig Butchering)",
        short_desc: "Long-term emotional manipulation combined with fake investing.",
        description: "Long-term emotional manipulation combined with fake crypto investing. The scammer builds trust over weeks or months, then convinces you to invest on a fake platform they control.",
        how_it_works: &[
            "Scammer builds romantic relationship over weeks/months",
            "Gradually introduces topic of crypto investing",
            "Shows fake profits on controlled platform",
            "Encourages larger deposits, then disappears with funds",
        ],
        defense: &[
            "Sudden crypto investment talk from online romance is a major red flag",
            "Never invest on platforms recommended by online-only relationships",
            "Fake platforms always show guaranteed/consistent profits",
            "Pressure to move off mainstream platforms is suspicious",
        ],
        risk_level: RiskLevel::Critical,
        category: "social",
    },
    ScamRecord {
        id: 9,
        title: "Giveaway Scams",
        short_desc: "Fake promotions promising free crypto in return for payment.",
        description: "Fake promotions promising free crypto. The scammer wants you to send crypto first, claiming you'll receive more in return.",
        how_it_works: &[
            "Fake giveaway announced via social media or hacked accounts",
            "Promises to double or multiply your crypto",
            "Requires sending crypto first to 'verify' your wallet",
            "Funds are stolen, nothing is returned",
        ],
        defense: &[
            "No legitimate giveaway ever requires sending crypto first",
            "Verify giveaways through official project channels",
            "Beware of livestream giveaways using old/fake footage",
            "Report fake giveaway posts immediately",
        ],
        risk_level: RiskLevel::High,
        category: "social",
    },
    ScamRecord {
        id: 10,
        title: "Friend-in-Need Scams",
        short_desc: "Compromised accounts requesting urgent financial help.",
        description: "Compromised accounts requesting urgent help. The scammer wants you to send funds quickly without proper verification.",
        how_it_works: &[
            "Scammer compromises friend's social media account",
            "Messages contacts claiming emergency situation",
            "Requests urgent crypto transfer",
            "Creates emotional pressure to act fast",
        ],
        defense: &[
            "Always verify urgent requests via another communication channel",
            "Watch for unusual messaging patterns or language",
            "Be skeptical of urgency and emotional pressure tactics",
            "Call the person directly before sending any funds",
        ],
        risk_level: RiskLevel::High,
        category: "social",
    },
];

const INVESTMENT_SCAMS: &[ScamRecord] = &[
    ScamRecord {
        id: 11,
        title: "Rug Pulls",
        short_desc: "Projects where developers abandon and drain all funds.",
        description: "Projects where developers abandon and drain funds. Scammers attract buyers, then remove liquidity or mint massive supply to steal value.",
        how_it_works: &[
            "Team launches token with attractive marketing",
            "Builds community and drives up price",
            "Removes liquidity or mints tokens to crash price",
            "Disappears with investor funds",
        ],
        defense: &[
            "Check if liquidity is locked and for how long",
            "Avoid projects with fully anonymous teams",
            "Review token distribution for red flags",
            "Research the project's history and audit status",
        ],
        risk_level: RiskLevel::Critical,
        category: "investment",
    },
    ScamRecord {
        id: 12,
        title: "Pump-and-Dump Schemes",
        short_desc: "Artificial price inflation followed by coordinated crash.",
        description: "Artificial price inflation followed by a crash. Scammers hype a token, then sell their holdings while others buy at inflated prices.",
        how_it_works: &[
            "Scammers accumulate large position in low-cap token",
            "Coordinate hype campaign across social media",
            "Price rises as retail buyers FOMO in",
            "Scammers dump holdings, crashing the price",
        ],
        defense: &[
            "Be wary of sudden hype with no fundamental backing",
            "Watch for coordinated social media posts",
            "Check if insider wallets are selling during hype",
            "If it sounds too good to be true, it is",
        ],
        risk_level: RiskLevel::High,
        category: "investment",
    },
    ScamRecord {
        id: 13,
        title: "Fake Presales / ICOs",
        short_desc: "Token sales that never deliver a product.",
        description: "Token sales that never deliver a product. Scammers want you to send funds to a contract or wallet, then disappear with the money.",
        how_it_works: &[
            "Fake project announces exclusive presale",
            "Creates urgency with limited slots or time pressure",
            "Collects funds via contract or wallet address",
            "Team disappears without delivering tokens",
        ],
        defense: &[
            "Verify project has legitimate audits and roadmap",
            "Be suspicious of unrealistic promises and returns",
            "Don't fall for artificial time pressure",
            "Research team backgrounds thoroughly",
        ],
        risk_level: RiskLevel::Critical,
        category: "investment",
    },
    ScamRecord {
        id: 14,
        title: "Fake Trading Bots",
        short_desc: "Bots claiming guaranteed profits from automated trading.",
        description: "Bots claiming guaranteed profits. The scammer convinces you to deposit funds or connect your wallet, which they then drain.",
        how_it_works: &[
            "Scammer promotes bot with fake profit screenshots",
            "Requires deposit or wallet connection to 'start'",
            "May show fake profits to encourage more deposits",
            "Eventually drains all connected funds",
        ],
        defense: &[
            "Guaranteed returns in crypto don't exist",
            "Never trust closed-source trading bots",
            "Never send funds to wallet addresses for 'bot access'",
            "Be skeptical of testimonials and profit claims",
        ],
        risk_level: RiskLevel::High,
        category: "investment",
    },
    ScamRecord {
        id: 15,
        title: "Signal Group Scams",
        short_desc: "Paid groups pretending to offer profitable trade signals.",
        description: "Paid groups pretending to offer profitable trades. Scammers want you to buy after they already bought, then they exit with profits.",
        how_it_works: &[
            "Scammer promotes paid signal group with fake results",
            "Buys tokens before signaling to group",
            "Group members buy, driving price up",
            "Scammer sells at peak, members left with losses",
        ],
        defense: &[
            "Signals often arrive after price has already moved",
            "Fake testimonials are common",
            "Check if admin wallets profit before members",
            "Free alpha rarely exists in paid groups",
        ],
        risk_level: RiskLevel::High,
        category: "investment",
    },
];

const DEFI_SCAMS: &[ScamRecord] = &[
    ScamRecord {
        id: 16,
        title: "Approval Draining",
        short_desc: "Malicious contracts abusing unlimited token approvals.",
        description: "Malicious contracts abusing token approvals. The scammer wants you to approve unlimited token access, allowing them to drain funds later.",
        how_it_works: &[
            "User interacts with malicious DeFi site or contract",
            "Approval request asks for unlimited token spending",
            "User approves without reading carefully",
            "Scammer drains all approved tokens at any time",
        ],
        defense: &[
            "Never approve unlimited token amounts",
            "Read every approval prompt carefully",
            "Use Revoke.cash to audit and remove unused approvals",
            "Set custom approval limits for each interaction",
        ],
        risk_level: RiskLevel::Critical,
        category: "defi",
    },
    ScamRecord {
        id: 17,
        title: "Malicious Airdrops / NFTs",
        short_desc: "Unsolicited assets that trigger wallet drains when interacted with.",
        description: "Unsolicited assets that trigger malicious actions. The scammer wants you to interact with the token or NFT, triggering a drain transaction.",
        how_it_works: &[
            "Scammer airdrops tokens or NFTs to wallets",
            "Assets contain malicious contract interactions",
            "Attempting to sell or transfer triggers drain",
            "Sometimes just listing can trigger approval exploits",
        ],
        defense: &[
            "Never interact with unknown airdropped assets",
            "Hide suspicious NFTs in your wallet",
            "Use burner wallets for unknown interactions",
            "Don't try to sell or swap unknown tokens",
        ],
        risk_level: RiskLevel::Critical,
        category: "defi",
    },
    ScamRecord {
        id: 18,
        title: "Fake DeFi Websites (Phishing)",
        short_desc: "Cloned websites of legitimate DeFi protocols.",
        description: "Cloned websites of legitimate protocols. Scammers want you to connect your wallet and approve transactions on their fake site.",
        how_it_works: &[
            "Scammer creates pixel-perfect clone of popular DeFi site",
            "Promotes via ads, SEO, or social media",
            "User connects wallet thinking it's legitimate",
            "Malicious transaction drains wallet",
        ],
        defense: &[
            "Bookmark official URLs and only use those",
            "Avoid clicking search ads for DeFi protocols",
            "Double-check domain spelling carefully",
            "Verify SSL certificates and contract addresses",
        ],
        risk_level: RiskLevel::Critical,
        category: "defi",
    },
    ScamRecord {
        id: 19,
        title: "Flash Loan Exploit Scams",
        short_desc: "Fake claims of exploit opportunities requiring upfront payment.",
        description: "Fake claims of exploit opportunities. Scammers try to extract upfront fees or investments, pretending to share profits from 'exploits'.",
        how_it_works: &[
            "Scammer claims to have discovered DeFi exploit",
            "Offers to share profits if you provide capital",
            "Uses technical jargon to sound legitimate",
            "Takes upfront payment and disappears",
        ],
        defense: &[
            "Real exploits are never shared publicly for 'investment'",
            "Excessive technical jargon is often used to confuse",
            "Never pay upfront fees for profit-sharing schemes",
            "If it sounds too good to be true, it's a scam",
        ],
        risk_level: RiskLevel::High,
        category: "defi",
    },
    ScamRecord {
        id: 20,
        title: "Upgrade/Proxy Contract Abuse",
        short_desc: "Contracts that can change logic after deployment to steal funds.",
        description: "Contracts that can change logic after deployment. Scammers want users to deposit funds before changing the contract to steal them.",
        how_it_works: &[
            "Project deploys upgradeable smart contract",
            "Attracts deposits with normal functionality",
            "Upgrades contract to include malicious logic",
            "Drains all deposited funds",
        ],
        defense: &[
            "Check who controls upgrade permissions (multisig, timelock)",
            "Prefer immutable contracts when possible",
            "Read audit reports for upgrade mechanism concerns",
            "Be cautious of new protocols with upgradeable contracts",
        ],
        risk_level: RiskLevel::High,
        category: "defi",
    },
];

const SOFTWARE_SCAMS: &[ScamRecord] = &[
    ScamRecord {
        id: 21,
        title: "Fake Wallet Apps",
        short_desc: "Malicious wallet software that steals your seed phrase.",
        description: "Malicious wallet software. Scammers want you to enter your seed phrase into their fake app, giving them full access to your funds.",
        how_it_works: &[
            "Fake wallet app mimics legitimate wallet UI",
            "Distributed through unofficial app stores or links",
            "Asks user to create or import wallet",
            "Seed phrase is sent directly to scammer",
        ],
        defense: &[
            "Download wallets only from official sources",
            "Verify app publishers and signatures",
            "Never sideload wallet apps",
            "Check reviews and download counts",
        ],
        risk_level: RiskLevel::Critical,
        category: "software",
    },
    ScamRecord {
        id: 22,
        title: "Browser Extension Scams",
        short_desc: "Trojan wallet extensions that monitor or steal credentials.",
        description: "Trojan wallet extensions. The scammer wants to monitor your transactions or steal your private keys through malicious browser extensions.",
        how_it_works: &[
            "Malicious extension mimics popular wallet",
            "May be installed through phishing or fake updates",
            "Monitors clipboard, keystrokes, or modifies pages",
            "Steals credentials or hijacks transactions",
        ],
        defense: &[
            "Verify extension publishers before installing",
            "Keep browser extensions to a minimum",
            "Only install from official extension stores",
            "Regularly audit installed extensions",
        ],
        risk_level: RiskLevel::Critical,
        category: "software",
    },
    ScamRecord {
        id: 23,
        title: "Supply Chain Attacks",
        short_desc: "Compromised software dependencies injecting malicious code.",
        description: "Compromised software dependencies. Attackers inject malicious code into libraries to steal keys or manipulate transactions.",
        how_it_works: &[
            "Attacker compromises popular code library",
            "Malicious code is included in updates",
            "Apps using the library become infected",
            "User keys or transactions are compromised",
        ],
        defense: &[
            "Developers should pin dependency versions",
            "Audit third-party libraries regularly",
            "Monitor for abnormal application behavior",
            "Use reputable, well-maintained libraries",
        ],
        risk_level: RiskLevel::High,
        category: "software",
    },
    ScamRecord {
        id: 24,
        title: "Keylogger Malware",
        short_desc: "Malware recording keystrokes or screens to capture secrets.",
        description: "Malware recording keystrokes or screens. The scammer wants to capture your seed phrases, passwords, or other sensitive information.",
        how_it_works: &[
            "Malware installed via phishing or downloads",
            "Records all keystrokes or takes screenshots",
            "Captures seed phrases when typed",
            "Sends data to attacker's server",
        ],
        defense: &[
            "Use hardware wallets that don't require typing seeds",
            "Never type seed phrases on internet-connected devices",
            "Use clean, dedicated devices for crypto",
            "Keep antivirus updated and run regular scans",
        ],
        risk_level: RiskLevel::Critical,
        category: "software",
    },
];

const NFT_SCAMS: &[ScamRecord] = &[
    ScamRecord {
        id: 28,
        title: "Fake Mint Links",
        short_desc: "Fraudulent NFT mint pages that drain your wallet.",
        description: "Fraudulent NFT mint pages. Scammers want you to connect your wallet and approve a drain transaction disguised as a mint.",
        how_it_works: &[
            "Scammer creates fake mint page for hyped collection",
            "Promotes via DMs, fake announcements, or ads",
            "User connects wallet thinking it's legitimate mint",
            "Transaction drains wallet instead of minting",
        ],
        defense: &[
            "Verify official mint announcements from project team",
            "Never trust surprise or 'secret' mint links",
            "Use burner wallets for new mints",
            "Wait for community confirmation before minting",
        ],
        risk_level: RiskLevel::Critical,
        category: "nft",
    },
    ScamRecord {
        id: 29,
        title: "Wash Trading",
        short_desc: "Artificial NFT trading volume to inflate perceived value.",
        description: "Artificial NFT trading volume. Scammers inflate prices with fake trades to lure real buyers, then exit with profits.",
        how_it_works: &[
            "Scammer trades NFT between own wallets",
            "Creates illusion of demand and rising prices",
            "Attracts real buyers at inflated prices",
            "Scammer sells to real buyers and exits",
        ],
        defense: &[
            "Check for repeated trades between same wallets",
            "Be suspicious of sudden volume spikes",
            "Look for genuine community and holder diversity",
            "Research trading history before buying",
        ],
        risk_level: RiskLevel::High,
        category: "nft",
    },
    ScamRecord {
        id: 30,
        title: "Copyright/Takedown Scams",
        short_desc: "Fake legal threats demanding crypto payment.",
        description: "Fake legal threats demanding payment. Scammers pressure victims to pay crypto quickly to avoid supposed legal consequences.",
        how_it_works: &[
            "Scammer sends fake copyright or legal notice",
            "Claims urgent action needed to avoid lawsuit",
            "Demands payment in cryptocurrency",
            "Creates fear and urgency to bypass rational thinking",
        ],
        defense: &[
            "Legitimate legal actions don't demand crypto payment",
            "Verify claims independently through official channels",
            "Don't respond emotionally to threats",
            "Consult real legal counsel if concerned",
        ],
        risk_level: RiskLevel::Medium,
        category: "nft",
    },
];

const CENTRALIZED_SCAMS: &[ScamRecord] = &[
    ScamRecord {
        id: 31,
        title: "Fake Exchanges",
        short_desc: "Fraudulent trading platforms that block withdrawals.",
        description: "Fraudulent trading platforms. Scammers allow deposits but block withdrawals with endless excuses.",
        how_it_works: &[
            "Scammer creates professional-looking exchange",
            "Allows deposits and shows fake trading",
            "Blocks or delays all withdrawal attempts",
            "Eventually disappears with all deposited funds",
        ],
        defense: &[
            "Check for regulatory footprint and licenses",
            "Research reputation before depositing",
            "Withdrawal delays and excuses are major red flags",
            "Use established, regulated exchanges",
        ],
        risk_level: RiskLevel::Critical,
        category: "centralized",
    },
    ScamRecord {
        id: 32,
        title: "Withdrawal Fee Scams",
        short_desc: "Fake fees required to unlock funds that never arrive.",
        description: "Fake fees to unlock funds. Scammers want repeated payments, but never release the funds.",
        how_it_works: &[
            "Platform shows large balance in your account",
            "Withdrawal requires paying 'tax' or 'fee'",
            "After payment, new fees are demanded",
            "Funds remain permanently locked",
        ],
        defense: &[
            "Legitimate platforms deduct fees automatically",
            "Multiple escalating fees are a scam",
            "Never pay external fees to unlock funds",
            "If funds are locked behind fees, they don't exist",
        ],
        risk_level: RiskLevel::Critical,
        category: "centralized",
    },
];

/// Look up a category by id
pub fn find_category(id: &str) -> Option<&'static ScamCategory> {
    SCAM_CATEGORIES.iter().find(|cat| cat.id == id)
}

/// Look up a record by id across all categories
pub fn find_scam(id: u32) -> Option<&'static ScamRecord> {
    all_scams().find(|scam| scam.id == id)
}

/// Every record, category by category, in declaration order
pub fn all_scams() -> impl Iterator<Item = &'static ScamRecord> {
    SCAM_CATEGORIES.iter().flat_map(|cat| cat.scams.iter())
}

pub fn total_scams() -> usize {
    SCAM_CATEGORIES.iter().map(|cat| cat.scams.len()).sum()
}

/// Pair each step with its 1-based position
pub fn numbered_steps(steps: &[&'static str]) -> Vec<(usize, &'static str)> {
    steps.iter().enumerate().map(|(i, step)| (i + 1, *step)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_records_reference_owning_category() {
        for cat in SCAM_CATEGORIES {
            for scam in cat.scams {
                assert_eq!(scam.category, cat.id, "record {} is filed under {}", scam.id, cat.id);
            }
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let scam_ids: HashSet<u32> = all_scams().map(|s| s.id).collect();
        assert_eq!(scam_ids.len(), total_scams());

        let cat_ids: HashSet<&str> = SCAM_CATEGORIES.iter().map(|c| c.id).collect();
        assert_eq!(cat_ids.len(), SCAM_CATEGORIES.len());
        assert!(!cat_ids.contains("all"));
    }

    #[test]
    fn test_records_have_steps() {
        for scam in all_scams() {
            assert!(!scam.how_it_works.is_empty(), "record {} has no steps", scam.id);
            assert!(!scam.defense.is_empty(), "record {} has no defense", scam.id);
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(find_category("defi").map(|c| c.name), Some("Smart Contract & DeFi"));
        assert!(find_category("missing").is_none());

        let proxy = find_scam(20).unwrap();
        assert_eq!(proxy.title, "Upgrade/Proxy Contract Abuse");
        assert_eq!(proxy.risk_level, RiskLevel::High);
        assert!(find_scam(999).is_none());
    }

    #[test]
    fn test_numbered_steps_keep_source_order() {
        let scam = find_scam(1).unwrap();
        let steps = numbered_steps(scam.how_it_works);
        assert_eq!(steps.len(), scam.how_it_works.len());
        assert_eq!(steps[0], (1, "Scammer analyzes your on-chain transaction history"));
        assert_eq!(steps.last().map(|s| s.0), Some(scam.how_it_works.len()));
        assert!(numbered_steps(&[]).is_empty());
    }

    #[test]
    fn test_all_scams_follows_declaration_order() {
        let ids: Vec<u32> = all_scams().take(4).map(|s| s.id).collect();
        // "keys" is declared first
        assert_eq!(ids, vec![25, 26, 27, 1]);
        assert_eq!(total_scams(), 32);
    }
}
