//! Cross-asset withdrawal inside a liquid-staking aggregate.
//!
//! An AVAX / yyAVAX pool where yyAVAX is worth `1.012287344219239968` AVAX.
//! yyAVAX holds 70 units of excess cash, so an AVAX liquidity provider can
//! exit into yyAVAX without touching AVAX's own cash.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=coverage_pool=debug cargo run --example withdraw_other_asset
//! ```

use coverage_pool::config::{AssetConfig, CurveConfig, GroupConfig, PoolConfig};
use coverage_pool::custody::InMemoryCustody;
use coverage_pool::domain::{Address, Amount, Decimals, GroupId, Timestamp, Token, Wad};
use coverage_pool::engine::{ExecutionContext, PoolEngine};
use coverage_pool::oracle::StaticRateSource;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Withdraw from other asset ===\n");

    // ── 1. Accounts and tokens ──────────────────────────────────────────
    let pool_account = Address::repeat(0xee);
    let provider = Address::repeat(0xa0);
    let avax = Token::new(Address::repeat(1), Decimals::new(18)?);
    let yyavax = Token::new(Address::repeat(2), Decimals::new(18)?);
    let lp_avax = Address::repeat(11);
    let lp_yyavax = Address::repeat(12);
    let group = GroupId::new(1);

    // ── 2. Pool state: AVAX fully covered, yyAVAX 170 / 100 ────────────
    let config = PoolConfig::new(
        CurveConfig::default(),
        vec![
            AssetConfig::with_balances(avax, lp_avax, "100".parse()?, "100".parse()?)?,
            AssetConfig::with_balances(yyavax, lp_yyavax, "170".parse()?, "100".parse()?)?,
        ],
        vec![GroupConfig::new(
            group,
            vec![avax.address(), yyavax.address()],
            Some(yyavax.address()),
        )?],
    )?;

    let mut custody = InMemoryCustody::new(pool_account);
    custody.credit(avax.address(), pool_account, "100".parse()?)?;
    custody.credit(yyavax.address(), pool_account, "170".parse()?)?;
    custody.credit(lp_avax, provider, "100".parse()?)?;
    custody.credit(lp_yyavax, provider, "100".parse()?)?;

    let now = Timestamp::new(1_700_000_000);
    let rate: Wad = "1.012287344219239968".parse()?;
    let rates = StaticRateSource::new().with_rate(group, rate, now.plus_secs(600));

    let mut engine = PoolEngine::new(&config, rates, custody)?;

    // ── 3. Quote ────────────────────────────────────────────────────────
    let max = engine.quote_max_initial_asset_withdrawable(&avax.address(), &yyavax.address(), now)?;
    println!("Max AVAX shares burnable for yyAVAX: {max}");

    let wanted: Amount = "70".parse()?;
    let quote = engine.quote_potential_withdraw_from_other_asset(
        &avax.address(),
        &yyavax.address(),
        wanted,
        now,
    )?;
    println!("Quote for {wanted} yyAVAX: {quote}");

    // ── 4. Execute ──────────────────────────────────────────────────────
    let record = engine.withdraw_from_other_asset(
        ExecutionContext::new(provider, now),
        &avax.address(),
        &yyavax.address(),
        wanted,
        quote.amount_out(),
        provider,
        now.plus_secs(30),
    )?;
    println!("Settled: {record}\n");

    // ── 5. Resulting ledgers ────────────────────────────────────────────
    for ledger in engine.registry().ledgers() {
        let token = ledger.token();
        println!(
            "{}: cash={} liability={} supply={}",
            ledger.asset(),
            token.to_standard_units(ledger.cash())?,
            token.to_standard_units(ledger.liability())?,
            token.to_standard_units(ledger.supply())?
        );
    }
    println!(
        "Provider AVAX shares left: {}",
        engine.custody().balance_of(&lp_avax, &provider)
    );
    println!(
        "Provider yyAVAX received:  {}",
        engine.custody().balance_of(&yyavax.address(), &provider)
    );

    Ok(())
}
