use common::{CourseId, SectionId, SemesterName, StudentId};
use criterion::{Criterion, criterion_group, criterion_main};
use txn_log::{
    AppendOptions, InMemoryTransactionLog, SequenceNumber, Transaction, TransactionAction,
    TransactionLog, TransactionLogExt, TransactionQuery,
};

fn make_entry(student_id: StudentId, sequence: i64) -> Transaction {
    Transaction::builder()
        .student_id(student_id)
        .course_id(CourseId::new("CMSC", 101).unwrap())
        .section_id(SectionId::new(1))
        .semester(SemesterName::new("Fall2025"))
        .action(TransactionAction::Register)
        .sequence(SequenceNumber::new(sequence))
        .build()
}

fn bench_append_single_entry(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("txn_log/append_single_entry", |b| {
        b.iter(|| {
            rt.block_on(async {
                let log = InMemoryTransactionLog::new();
                let student_id = StudentId::new();
                let entry = make_entry(student_id, 1);
                log.append(vec![entry], AppendOptions::new()).await.unwrap();
            });
        });
    });
}

fn bench_append_with_sequence_check(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("txn_log/append_with_sequence_check", |b| {
        b.iter(|| {
            rt.block_on(async {
                let log = InMemoryTransactionLog::new();
                let student_id = StudentId::new();
                let entry = make_entry(student_id, 1);
                log.append(vec![entry], AppendOptions::expect_new())
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_get_for_student(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let log = InMemoryTransactionLog::new();
    let student_id = StudentId::new();

    // Pre-populate with 100 entries
    rt.block_on(async {
        let entries: Vec<Transaction> = (1..=100).map(|s| make_entry(student_id, s)).collect();
        log.append(entries, AppendOptions::new()).await.unwrap();
    });

    c.bench_function("txn_log/get_for_student_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                log.get_for_student(student_id).await.unwrap();
            });
        });
    });
}

fn bench_query_by_action(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let log = InMemoryTransactionLog::new();
    let student_id = StudentId::new();

    rt.block_on(async {
        let entries: Vec<Transaction> = (1..=100).map(|s| make_entry(student_id, s)).collect();
        log.append(entries, AppendOptions::new()).await.unwrap();
    });

    c.bench_function("txn_log/query_by_action_100", |b| {
        b.iter(|| {
            rt.block_on(async {
                log.query(
                    TransactionQuery::for_student(student_id).action(TransactionAction::Register),
                )
                .await
                .unwrap();
            });
        });
    });
}

fn bench_stream_all(c: &mut Criterion) {
    use futures_util::StreamExt;

    let rt = tokio::runtime::Runtime::new().unwrap();
    let log = InMemoryTransactionLog::new();

    // Pre-populate with 1000 entries across 10 students
    rt.block_on(async {
        for _ in 0..10 {
            let student_id = StudentId::new();
            let entries: Vec<Transaction> = (1..=100).map(|s| make_entry(student_id, s)).collect();
            log.append(entries, AppendOptions::new()).await.unwrap();
        }
    });

    c.bench_function("txn_log/stream_1000_entries", |b| {
        b.iter(|| {
            rt.block_on(async {
                let mut stream = log.stream_all().await.unwrap();
                let mut count = 0;
                while let Some(result) = stream.next().await {
                    result.unwrap();
                    count += 1;
                }
                assert_eq!(count, 1000);
            });
        });
    });
}

fn bench_append_one_ext(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("txn_log/append_single_via_ext", |b| {
        b.iter(|| {
            rt.block_on(async {
                let log = InMemoryTransactionLog::new();
                let student_id = StudentId::new();
                let entry = make_entry(student_id, 1);
                log.append_one(entry, AppendOptions::new()).await.unwrap();
            });
        });
    });
}

criterion_group!(
    benches,
    bench_append_single_entry,
    bench_append_with_sequence_check,
    bench_get_for_student,
    bench_query_by_action,
    bench_stream_all,
    bench_append_one_ext,
);
criterion_main!(benches);
