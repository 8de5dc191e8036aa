/*!
 * Tests for the serialized streaming reducer
 */

use std::time::Duration;

use aidesk::{SectionSink, StreamReducer};

async fn stream_into(sink: SectionSink, chunks: &[&str]) {
    for chunk in chunks {
        sink.push(*chunk);
        tokio::time::sleep(Duration::from_millis(1)).await;
    }
}

/// Many concurrent streams, one per section, never corrupt each other
#[tokio::test]
async fn test_streamReducer_manyConcurrentStreams_shouldKeepSectionsIsolated() {
    let reducer = StreamReducer::new(4);
    let mut handles = Vec::new();
    for index in 0..4 {
        let sink = reducer.sink(index);
        handles.push(tokio::spawn(async move {
            let word = format!("section-{} ", index);
            for _ in 0..10 {
                sink.push(word.clone());
                tokio::task::yield_now().await;
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let sections = reducer.finish().await;
    for (index, section) in sections.iter().enumerate() {
        let expected = format!("section-{} ", index).repeat(10);
        assert_eq!(section, &expected);
    }
}

/// finish() waits for in-flight pushes before returning
#[tokio::test]
async fn test_streamReducer_finish_shouldApplyAllPendingUpdates() {
    let reducer = StreamReducer::new(1);
    let sink = reducer.sink(0);

    let producer = tokio::spawn(stream_into(sink, &["a", "b", "c"]));
    producer.await.unwrap();

    let sections = reducer.finish().await;
    assert_eq!(sections[0], "abc");
}

/// Cloned sinks write to the same section
#[tokio::test]
async fn test_sectionSink_clones_shouldShareSection() {
    let reducer = StreamReducer::new(1);
    let sink = reducer.sink(0);
    let twin = sink.clone();

    sink.push("a");
    drop(sink);
    twin.push("b");
    drop(twin);

    let sections = reducer.finish().await;
    assert_eq!(sections[0], "ab");
}

#[tokio::test]
async fn test_streamReducer_sinkIndex_shouldMatchRequestedSection() {
    let reducer = StreamReducer::new(3);
    assert_eq!(reducer.sink(2).index(), 2);
    assert_eq!(reducer.sections(), 3);
    reducer.finish().await;
}
