criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        detecting_standard_win,
        rejecting_scattered_hand,
        collecting_waits,
        dealing_taihu_game,
        playing_huitong_game,
        playing_taihu_game,
}

fn detecting_standard_win(c: &mut criterion::Criterion) {
    let counts = Counts::from(parse("111234m 567p 789s 99s").unwrap().as_slice());
    c.bench_function("detect a 14-tile standard win", |b| {
        b.iter(|| tiles::is_complete(&counts))
    });
}

fn rejecting_scattered_hand(c: &mut criterion::Criterion) {
    let counts = Counts::from(parse("1122335577m 1369p").unwrap().as_slice());
    c.bench_function("reject a 14-tile near miss", |b| {
        b.iter(|| tiles::is_complete(&counts))
    });
}

fn collecting_waits(c: &mut criterion::Criterion) {
    let hand = parse("1112345678999m").unwrap();
    c.bench_function("collect the waits of a nine-gates hand", |b| {
        b.iter(|| tiles::waits(&hand))
    });
}

fn dealing_taihu_game(c: &mut criterion::Criterion) {
    c.bench_function("deal a Taihu game with flower replacement", |b| {
        b.iter(|| {
            let mut engine = Variant::Taihu.engine();
            engine
                .initialize(players(), GameConfig::default().with_seed(7))
                .unwrap();
            engine
        })
    });
}

fn playing_huitong_game(c: &mut criterion::Criterion) {
    c.bench_function("play a Huitong game between robots", |b| {
        b.iter(|| play(Variant::Huitong))
    });
}

fn playing_taihu_game(c: &mut criterion::Criterion) {
    c.bench_function("play a Taihu game between robots", |b| {
        b.iter(|| play(Variant::Taihu))
    });
}

fn players() -> Vec<String> {
    (0..4).map(|i| format!("p{}", i)).collect()
}

fn play(variant: Variant) -> usize {
    let mut engine = variant.engine();
    engine
        .initialize(players(), GameConfig::default().with_seed(7))
        .unwrap();
    autoplay(&mut engine, &mut Robot::seeded(7)).unwrap()
}

use mahjong::Variant;
use mahjong::engine::GameConfig;
use mahjong::gameroom::Robot;
use mahjong::gameroom::autoplay;
use mahjong::tiles;
use mahjong::tiles::Counts;
use mahjong::tiles::parse;
