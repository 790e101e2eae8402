use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use photorap_opensfm::{
    reconstruction_to_recording, Camera, ConversionOptions, Point, Reconstruction, Shot,
};

// synthetic reconstruction with `num_cameras` cameras sharing `num_shots` shots
fn make_reconstruction(num_cameras: usize, num_shots: usize, num_points: usize) -> Reconstruction {
    let mut recon = Reconstruction::default();
    for c in 0..num_cameras {
        recon.cameras.insert(
            format!("camera_{c}"),
            Camera {
                projection_type: "perspective".to_string(),
                width: 1920,
                height: 1080,
                focal: 0.85,
                k1: 0.0,
                k2: 0.0,
            },
        );
    }
    for s in 0..num_shots {
        let t = s as f64;
        recon.shots.insert(
            format!("frame_{s:06}.jpg"),
            Shot {
                camera: format!("camera_{}", s % num_cameras),
                rotation: [t.sin(), t.cos(), (t * 0.1).sin()],
                translation: [t, t * 0.5, -t],
                capture_time: 0.0,
                orientation: 1,
                scale: 1.0,
            },
        );
    }
    for p in 0..num_points {
        let v = p as f64;
        recon.points.insert(
            p.to_string(),
            Point {
                coordinates: [v, -v, v * 2.0],
                color: [(p % 256) as f64, 128.0, 255.0],
            },
        );
    }
    recon
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconstruction_to_recording");
    let options = ConversionOptions::default();

    for num_shots in [100, 1_000, 10_000].iter() {
        let recon = make_reconstruction(4, *num_shots, *num_shots * 10);
        group.bench_with_input(BenchmarkId::new("shots", num_shots), &recon, |b, recon| {
            b.iter(|| reconstruction_to_recording(black_box(recon), &options, &[]))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
