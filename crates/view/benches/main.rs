use criterion::{criterion_group, criterion_main, Criterion};
use seq_slice::SliceSpec;
use seq_view::{SequenceView, View};


fn slicing_setup(c: &mut Criterion) {
    let data: Vec<u64> = (0..1_000_000).collect();
    let trim = SliceSpec::bounds(1, -1);

    c.bench_function("re-slice 400 levels deep: WINDOW", |bench| {
        bench.iter(|| {
            let mut window = View::new(&data).slice(SliceSpec::full()).unwrap();
            for _ in 0..400 {
                window = window.slice(trim).unwrap();
            }
            (window.len(), window.get(0).unwrap())
        })
    });

    c.bench_function("re-slice 400 levels deep: COPY", |bench| {
        bench.iter(|| {
            let mut copy = data.clone();
            for _ in 0..400 {
                copy = View::new(&copy).slice(trim).unwrap().to_vec();
            }
            (copy.len(), copy[0])
        })
    });
}


criterion_group!(slicing, slicing_setup);
criterion_main!(slicing);
