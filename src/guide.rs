/// Where the send-transaction payload format is documented.
pub const DOCS_URL: &str =
    "https://docs.world.org/mini-apps/commands/send-transaction#creating-a-transaction";

const GUIDE: [&str; 26] = [
    "📋 MiniKit Transaction Format Guide",
    "===================================",
    "",
    "✅ Correct Format:",
    "{",
    "  address: \"0x...\",",
    "  abi: [...],",
    "  functionName: \"functionName\",",
    "  args: [...],",
    "  value: \"0x0\"",
    "}",
    "",
    "❌ Common Mistakes:",
    "- Adding chainId field (not supported)",
    "- Not specifying contract in Developer Portal",
    "- Incorrect ABI format",
    "- Wrong value format (should be hex string)",
    "",
    "🔧 Developer Portal Setup:",
    "1. Go to Developer Portal",
    "2. Configuration → Advanced",
    "3. Add your contract address",
    "4. Select correct chain",
    "",
    "📚 Documentation:",
    DOCS_URL,
];

/// Static help text for building MiniKit transactions, one entry per line.
pub fn guide_lines() -> &'static [&'static str] {
    &GUIDE
}
