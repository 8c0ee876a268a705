use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use grouphub_auth::{
    GroupRole, Membership, Principal, can_do, cap, has_min_role, is_owner_of_any,
};
use grouphub_core::{GroupId, UserId};

fn many_memberships() -> Principal {
    let memberships = (0..32)
        .map(|i| {
            let role = GroupRole::ALL[i % GroupRole::ALL.len()];
            Membership::new(GroupId::new(format!("group-{i}")), role)
        })
        .collect();
    Principal::new(UserId::new(), memberships)
}

fn bench_guards(c: &mut Criterion) {
    let principal = many_memberships();
    let group = GroupId::new("group-17");

    c.bench_function("has_min_role", |b| {
        b.iter(|| has_min_role(black_box(&principal), black_box(&group), GroupRole::Manager))
    });

    c.bench_function("can_do", |b| {
        b.iter(|| can_do(black_box(&principal), black_box(&group), &cap::GROUPS_DELETE))
    });

    c.bench_function("is_owner_of_any", |b| {
        b.iter(|| is_owner_of_any(black_box(&principal)))
    });
}

criterion_group!(benches, bench_guards);
criterion_main!(benches);
