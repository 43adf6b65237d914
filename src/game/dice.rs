//! ダメージ乱数の供給源
//!
//! ゲーム本体は `DamageRoll` 越しに乱数を受け取るので、テストでは
//! `FixedRolls` を、再現可能な実行では `SeededRoll` を差し込める。

use std::collections::VecDeque;
use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, thread_rng};

/// 半開区間 `[start, end)` の整数を1つ返す乱数源
pub trait DamageRoll: Send {
    fn roll(&mut self, range: Range<i64>) -> i64;
}

/// スレッドローカルの乱数生成器を使う既定の実装
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRoll;

impl DamageRoll for ThreadRoll {
    fn roll(&mut self, range: Range<i64>) -> i64 {
        thread_rng().gen_range(range)
    }
}

/// シード固定の乱数生成器
#[derive(Debug, Clone)]
pub struct SeededRoll {
    rng: StdRng,
}

impl SeededRoll {
    pub fn new(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl DamageRoll for SeededRoll {
    fn roll(&mut self, range: Range<i64>) -> i64 {
        self.rng.gen_range(range)
    }
}

/// 事前に積んだ値を順番に返す。範囲チェックはしない。
/// 空になったら範囲の下限を返す。
#[derive(Debug, Default, Clone)]
pub struct FixedRolls {
    queue: VecDeque<i64>,
}

impl FixedRolls {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self { queue: values.into_iter().collect() }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DamageRoll for FixedRolls {
    fn roll(&mut self, range: Range<i64>) -> i64 {
        self.queue.pop_front().unwrap_or(range.start)
    }
}
