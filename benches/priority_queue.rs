use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prioqueue::PriorityQueue;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ITER: u64 = 4 * 1024;

fn random_priorities(spread: i64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(ITER);
    (0..ITER).map(|_| rng.gen_range(0..spread)).collect()
}

fn task_insert_u64(priorities: &[i64]) -> PriorityQueue<u64> {
    let mut queue = PriorityQueue::with_capacity(priorities.len());
    for (i, priority) in priorities.iter().enumerate() {
        queue.insert(i as u64, *priority).unwrap();
    }
    queue
}

fn insert_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_u64");
    group.throughput(Throughput::Elements(ITER));

    for spread in [1, 16, ITER as i64] {
        let priorities = random_priorities(spread);
        group.bench_with_input(
            BenchmarkId::from_parameter(spread),
            &priorities,
            |b, priorities| b.iter(|| task_insert_u64(priorities)),
        );
    }

    group.finish();
}

fn task_pop_u64(mut queue: PriorityQueue<u64>) {
    while let Ok((payload, _)) = queue.pop_minimum() {
        criterion::black_box(payload);
    }
}

fn pop_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("pop_u64");
    group.throughput(Throughput::Elements(ITER));

    for spread in [1, 16, ITER as i64] {
        let queue = task_insert_u64(&random_priorities(spread));
        group.bench_with_input(BenchmarkId::from_parameter(spread), &queue, |b, queue| {
            b.iter(|| task_pop_u64(queue.clone()))
        });
    }

    group.finish();
}

criterion_group!(benches, insert_u64, pop_u64);
criterion_main!(benches);
