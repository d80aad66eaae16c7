// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;
extern crate avl;
extern crate rand;

use avl::AvlTree;
use criterion::{Criterion, black_box};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn insert_rand(c: &mut Criterion, n: usize) {
    c.bench_function(&format!("insert_rand_{}", n), move |b| {
        let mut tree = AvlTree::new();
        // setup
        let mut rng = StdRng::seed_from_u64(n as u64);

        for _ in 0..n {
            tree.insert(rng.gen::<usize>() % n);
        }

        // measure
        b.iter(|| {
            let k = rng.gen::<usize>() % n;
            tree.insert(k);
            tree.remove(&k);
        });
    });
}

fn insert_seq(c: &mut Criterion, n: usize) {
    c.bench_function(&format!("insert_seq_{}", n), move |b| {
        let mut tree = AvlTree::new();
        // setup
        for i in 0..n {
            tree.insert(i * 2);
        }

        // measure
        let mut i = 1;
        b.iter(|| {
            tree.insert(i);
            tree.remove(&i);
            i = (i + 2) % (n * 2);
        });
    });
}

fn find_rand(c: &mut Criterion, n: usize) {
    c.bench_function(&format!("find_rand_{}", n), move |b| {
        let mut tree = AvlTree::new();

        // setup
        let mut rng = StdRng::seed_from_u64(n as u64);
        let mut keys: Vec<_> = (0..n).map(|_| rng.gen::<usize>() % n).collect();

        for &k in &keys {
            tree.insert(k);
        }

        keys.shuffle(&mut rng);

        // measure
        let mut i = 0;
        b.iter(|| {
            let t = tree.contains(&keys[i]);
            i = (i + 1) % n;
            black_box(t);
        })
    });
}

fn iter(c: &mut Criterion, n: usize) {
    c.bench_function(&format!("iter_{}", n), move |b| {
        let mut rng = StdRng::seed_from_u64(n as u64);
        let tree: AvlTree<u32> = (0..n).map(|_| rng.gen()).collect();

        b.iter(|| {
            for node in tree.nodes() {
                black_box(node.balance_factor());
            }
        });
    });
}

fn bench(c: &mut Criterion) {
    for &n in &[100, 10_000] {
        insert_rand(c, n);
        insert_seq(c, n);
        find_rand(c, n);
    }

    for &n in &[100, 1000, 100_000] {
        iter(c, n);
    }
}

criterion_group!(benches, bench);
criterion_main!(benches);
