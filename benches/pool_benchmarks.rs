use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use drillbox::content;
use drillbox::session::{ItemPool, Mode, SessionController};

fn bench_pool(c: &mut Criterion) {
    let set = content::find("katakana:all").map(|s| s.item_set()).unwrap();

    c.bench_function("pool initialize (katakana:all)", |b| {
        b.iter(|| ItemPool::initialize(black_box(&set)))
    });

    c.bench_function("pool draw (46 items)", |b| {
        let pool = ItemPool::initialize(&set).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        b.iter(|| pool.draw(&mut rng).map(|item| item.display.len()))
    });

    c.bench_function("pool drain by removal (46 items)", |b| {
        b.iter(|| {
            let mut pool = ItemPool::initialize(&set).unwrap();
            let mut rng = SmallRng::seed_from_u64(7);
            while let Ok(item) = pool.draw(&mut rng) {
                let display = item.display.clone();
                pool.remove(black_box(&display));
            }
        })
    });
}

fn bench_quiz(c: &mut Criterion) {
    let set = content::find("hiragana:all").map(|s| s.item_set()).unwrap();

    c.bench_function("full quiz, all answers correct (46 items)", |b| {
        b.iter(|| {
            let mut session = SessionController::with_rng(SmallRng::seed_from_u64(11));
            session.start(set.clone(), Mode::Quiz).unwrap();
            while let Some(answer) = session.current_item().map(|i| i.answer.clone()) {
                session.submit_answer(black_box(&answer)).unwrap();
            }
        })
    });
}

criterion_group!(benches, bench_pool, bench_quiz);
criterion_main!(benches);
