use criterion::{Criterion, black_box, criterion_group, criterion_main};
use quill::Compiler;
use quill::ast::{BinaryOperator, Expression};

const SIZES: [(&str, usize); 2] = [("small", 8), ("large", 1_000)];

// 1 + 2 + ... + n, every step foldable.
fn constant_sum(compiler: &Compiler, n: usize) -> Expression {
    (2..=n as i64).fold(compiler.create_int_expression(1), |acc, value| {
        compiler.create_binary_expression(
            BinaryOperator::Add,
            acc,
            compiler.create_int_expression(value),
        )
    })
}

// x + 1 + 2 + ... + n, nothing foldable.
fn variable_sum(compiler: &Compiler, n: usize) -> Expression {
    (1..=n as i64).fold(compiler.create_identifier_expression("x"), |acc, value| {
        compiler.create_binary_expression(
            BinaryOperator::Add,
            acc,
            compiler.create_int_expression(value),
        )
    })
}

fn bench_builder(c: &mut Criterion) {
    for (label, n) in SIZES {
        c.bench_function(&format!("builder_argument_chain_{label}"), |b| {
            let compiler = Compiler::new();
            b.iter(|| {
                let list = (1..n as i64).fold(
                    compiler.create_argument_list(compiler.create_int_expression(0)),
                    |list, value| {
                        compiler.chain_argument_list(list, compiler.create_int_expression(value))
                    },
                );
                black_box(list);
            })
        });

        c.bench_function(&format!("builder_fold_constant_sum_{label}"), |b| {
            let compiler = Compiler::new();
            b.iter(|| black_box(constant_sum(&compiler, black_box(n))))
        });

        c.bench_function(&format!("builder_variable_sum_{label}"), |b| {
            let compiler = Compiler::new();
            b.iter(|| black_box(variable_sum(&compiler, black_box(n))))
        });
    }
}

criterion_group!(benches, bench_builder);
criterion_main!(benches);
