use atm_fees::calculator::FeeCalculator;
use atm_fees::core::registry::BankRegistry;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;

fn bench_required_balance(c: &mut Criterion) {
    let calc = FeeCalculator::default();
    let registry = BankRegistry::standard();
    let bank = registry.first();

    c.bench_function("required_balance", |b| {
        b.iter(|| calc.required_balance(black_box(Decimal::new(12_345, 2)), bank, true))
    });
}

fn bench_available_to_withdraw(c: &mut Criterion) {
    let calc = FeeCalculator::default();
    let registry = BankRegistry::standard();
    let bank = registry.first();

    c.bench_function("available_to_withdraw", |b| {
        b.iter(|| calc.available_to_withdraw(black_box(Decimal::new(45_678, 2)), bank, true))
    });
}

fn bench_balance_sweep(c: &mut Criterion) {
    let calc = FeeCalculator::default();
    let registry = BankRegistry::standard();
    let balances: Vec<Decimal> = (0..1_000i64).map(|i| Decimal::new(i * 137, 2)).collect();

    c.bench_function("available_sweep_all_banks", |b| {
        b.iter(|| {
            for bank in registry.iter() {
                for balance in &balances {
                    black_box(calc.available_to_withdraw(*balance, bank, true));
                }
            }
        })
    });
}

criterion_group!(
    benches,
    bench_required_balance,
    bench_available_to_withdraw,
    bench_balance_sweep
);
criterion_main!(benches);
