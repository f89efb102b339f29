//! Static Page Content
//!
//! Copy for the non-catalog sections.

use crate::models::{ChecklistItem, FaqEntry, HeroStat, InfoPoint, WalletFeature};

pub const CHECKLIST_ITEMS: &[ChecklistItem] = &[
    ChecklistItem { id: 1, label: "I use a hardware wallet for significant holdings", category: "Wallet Security" },
    ChecklistItem { id: 2, label: "I never share my seed phrase with anyone", category: "Wallet Security" },
    ChecklistItem { id: 3, label: "I verify every character of addresses before sending", category: "Transaction Safety" },
    ChecklistItem { id: 4, label: "I never copy addresses from transaction history", category: "Transaction Safety" },
    ChecklistItem { id: 5, label: "I only use bookmarked official DeFi sites", category: "Web Safety" },
    ChecklistItem { id: 6, label: "I read signature requests carefully before signing", category: "Web Safety" },
    ChecklistItem { id: 7, label: "I regularly revoke unused token approvals", category: "Maintenance" },
    ChecklistItem { id: 8, label: "I use separate wallets for different activities", category: "Maintenance" },
];

pub const WALLET_FEATURES: &[WalletFeature] = &[
    WalletFeature {
        name: "Private keys location",
        hot: "On internet-connected device",
        cold: "On offline, secure device",
    },
    WalletFeature {
        name: "Vulnerability to hacks",
        hot: "High - always connected",
        cold: "Very Low - requires physical confirmation",
    },
    WalletFeature {
        name: "Malware protection",
        hot: "Relies on device security",
        cold: "Immune - isolated environment",
    },
    WalletFeature {
        name: "Best for",
        hot: "Small amounts, frequent use",
        cold: "Long-term storage, large amounts",
    },
];

pub const FAQS: &[FaqEntry] = &[
    FaqEntry {
        question: "Why is my seed phrase so important, and how should I protect it?",
        answer: "Your seed phrase (12-24 words) is the master key to all your crypto. Anyone with it has complete, irreversible access to your funds. **Never** type it on any website, app, or online form. No legitimate service will ever ask for it. Write it down on paper (or metal for fire/water resistance), store it in multiple secure physical locations, and never photograph, screenshot, or store it digitally. If someone asks for your seed phrase, it's always a scam.",
    },
    FaqEntry {
        question: "What's the safest way to store my crypto?",
        answer: "A hardware wallet is the gold standard. It keeps your private keys offline, making them impossible to steal remotely. For everyday use, keep only small amounts in hot wallets.",
    },
    FaqEntry {
        question: "How do I know if a website or DApp is legitimate?",
        answer: "Always verify URLs character by character. Scammers use lookalike domains (e.g. `uniswáp.com` with an accent). Bookmark official sites, check social media for verified links, and never click links from DMs or emails.",
    },
    FaqEntry {
        question: "What should I do if I accidentally approved a malicious contract?",
        answer: "Act immediately: use a tool like [Revoke.cash](https://revoke.cash) or Etherscan's Token Approval Checker to revoke the approval. Move remaining assets to a fresh wallet. In the future, always review what permissions you're granting before signing.",
    },
    FaqEntry {
        question: "Can scammers steal my crypto just by knowing my wallet address?",
        answer: "No. Your public address is safe to share. However, scammers use it for *address poisoning* attacks, sending tiny transactions from similar-looking addresses hoping you'll copy the wrong one later. Always verify the full address.",
    },
    FaqEntry {
        question: "Are crypto recovery services legitimate?",
        answer: "Almost all are scams. Legitimate recovery is extremely limited and usually only possible if you have partial seed phrase info. Anyone guaranteeing recovery or asking for upfront fees is almost certainly a scammer.",
    },
    FaqEntry {
        question: "Why do scammers ask me to 'validate' or 'sync' my wallet?",
        answer: "These are phishing attempts. There's no such thing as wallet validation or syncing in crypto. These fake sites trick you into entering your seed phrase, which gives scammers complete access to your funds.",
    },
    FaqEntry {
        question: "Is it safe to connect my wallet to DApps?",
        answer: "Connecting only shares your public address, and that's safe. The danger comes from signing transactions or approving token spending. Always read what you're signing, use transaction simulation tools, and revoke unused approvals regularly.",
    },
    FaqEntry {
        question: "How can I verify if an airdrop is real?",
        answer: "Real airdrops never ask you to send crypto first or connect to unknown sites. Check the project's official channels for announcements. If you received random tokens, don't interact with them. They might trigger malicious contracts.",
    },
];

pub const HERO_STATS: &[HeroStat] = &[
    HeroStat { value: "$14B+", caption: "Lost to scams in 2023", class: "stat-value gradient-text" },
    HeroStat { value: "46%", caption: "Victims are 20-40 years old", class: "stat-value text-warning" },
    HeroStat { value: "80%", caption: "Avoidable with education", class: "stat-value text-success" },
];

pub const PLAYBOOK_POINTS: &[InfoPoint] = &[
    InfoPoint {
        icon: "⚠️",
        title: "Deception",
        description: "Scammers use fake identities, websites, and promises to trick victims",
    },
    InfoPoint {
        icon: "🎯",
        title: "Targeting",
        description: "They exploit emotions like fear, greed, and urgency to manipulate decisions",
    },
    InfoPoint {
        icon: "💸",
        title: "Theft",
        description: "The goal is always to steal your crypto, private keys, or personal data",
    },
    InfoPoint {
        icon: "🛡️",
        title: "Prevention",
        description: "Knowledge and vigilance are your best defense against these attacks",
    },
];

pub const PROTECTION_TIPS: &[InfoPoint] = &[
    InfoPoint {
        icon: "🔑",
        title: "Never Share Private Keys",
        description: "Your seed phrase and private keys should never be shared with anyone. No legitimate service will ever ask for them.",
    },
    InfoPoint {
        icon: "🔍",
        title: "Research Before Investing",
        description: "Always verify the legitimacy of a project. Check the team, audit reports, and community before investing.",
    },
    InfoPoint {
        icon: "⏳",
        title: "Avoid FOMO Decisions",
        description: "Scammers create urgency. Take time to think. If it sounds too good to be true, it probably is.",
    },
    InfoPoint {
        icon: "🛡️",
        title: "Use Hardware Wallets",
        description: "Store significant amounts in hardware wallets. They keep your keys offline and safe from hackers.",
    },
    InfoPoint {
        icon: "📱",
        title: "Enable 2FA Everywhere",
        description: "Use authenticator apps, not SMS. Enable two-factor authentication on all crypto-related accounts.",
    },
    InfoPoint {
        icon: "📚",
        title: "Stay Educated",
        description: "The crypto space evolves fast. Stay updated on new scam techniques and security best practices.",
    },
];
