#![feature(test)]

use box_cover::box_2d::Box2D;
use box_cover::strategy::{optimal_partition, BoxStrategy, DownloadStrategy};

extern crate test;

use test::Bencher;

/// A grid of `n` x `n` fetched tiles with every other tile missing.
fn checkerboard(n: i64, tile: i64) -> Vec<Box2D> {
    let mut boxes = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if (i + j) % 2 == 0 {
                boxes.push(Box2D::new(i * tile, j * tile, (i + 1) * tile, (j + 1) * tile));
            }
        }
    }
    boxes
}

#[bench]
fn test_box_strategy_pan(b: &mut Bencher) {
    let present = [Box2D::new(0, 0, 1_000_000, 1_000_000)];
    let viewport = Box2D::new(250_000, 400_000, 1_250_000, 1_400_000);

    b.iter(|| {
        let _boxes = BoxStrategy.boxes(&viewport, &present, 4);
    })
}

#[bench]
fn test_box_strategy_checkerboard(b: &mut Bencher) {
    let present = checkerboard(6, 100);
    let viewport = Box2D::new(0, 0, 600, 600);

    b.iter(|| {
        let _boxes = BoxStrategy.boxes(&viewport, &present, 4);
    })
}

#[bench]
fn test_subtract_all_checkerboard(b: &mut Bencher) {
    let present = checkerboard(6, 100);
    let viewport = Box2D::new(50, 50, 550, 550);

    b.iter(|| {
        let _missing = Box2D::merge(&viewport.subtract_all(&present));
    })
}

#[bench]
fn test_optimal_partition_sixteen_boxes(b: &mut Bencher) {
    let boxes = checkerboard(6, 100)
        .into_iter()
        .take(16)
        .collect::<Vec<_>>();

    b.iter(|| {
        let _parts = optimal_partition(4, &boxes);
    })
}
