use anyhow::Result;
use keel::{GrowVec, Queue, SequenceOps, Stack};
use std::collections::VecDeque;

#[test]
fn stack_balances_brackets() -> Result<()> {
    fn balanced(text: &str) -> Result<bool> {
        let mut stack: Stack<char> = Stack::new();
        for c in text.chars() {
            match c {
                '(' | '[' | '{' => stack.push(c)?,
                ')' => {
                    if stack.pop() != Some('(') {
                        return Ok(false);
                    }
                }
                ']' => {
                    if stack.pop() != Some('[') {
                        return Ok(false);
                    }
                }
                '}' => {
                    if stack.pop() != Some('{') {
                        return Ok(false);
                    }
                }
                _ => {}
            }
        }
        Ok(stack.is_empty())
    }

    assert!(balanced("([{x}])")?);
    assert!(!balanced("([)]")?);
    assert!(!balanced("(")?);
    Ok(())
}

#[test]
fn queue_round_robins() -> Result<()> {
    let mut queue: Queue<&str> = Queue::new();
    queue.push("a")?;
    queue.push("b")?;
    assert_eq!(queue.pop(), Some("a"));
    queue.push("c")?;
    assert_eq!(queue.pop(), Some("b"));
    assert_eq!(queue.pop(), Some("c"));
    assert_eq!(queue.pop(), None);
    Ok(())
}

#[test]
fn adapters_expose_their_backing() -> Result<()> {
    let mut stack: Stack<i32> = Stack::new();
    for i in 0..4 {
        stack.push(i)?;
    }
    let seq: GrowVec<i32> = stack.into_seq();
    assert_eq!(seq.as_slice(), &[0, 1, 2, 3]);

    let rebuilt: Stack<i32> = Stack::from_seq(seq);
    assert_eq!(rebuilt.top(), Some(&3));
    Ok(())
}

#[test]
fn sequence_ops_is_object_agnostic() -> Result<()> {
    fn drain_back<T, C: SequenceOps<T>>(seq: &mut C) -> Vec<T> {
        let mut out = Vec::new();
        while let Some(v) = seq.pop_back() {
            out.push(v);
        }
        out
    }

    let mut grow: GrowVec<i32> = [1, 2, 3].into();
    let mut ring: VecDeque<i32> = [1, 2, 3].into_iter().collect();
    assert_eq!(drain_back(&mut grow), drain_back(&mut ring));
    Ok(())
}

#[test]
fn queue_over_ring_buffer_backing() -> Result<()> {
    let mut queue: Queue<i32, VecDeque<i32>> = Queue::new();
    for i in 0..1000 {
        queue.push(i)?;
    }
    for i in 0..1000 {
        assert_eq!(queue.pop(), Some(i));
    }
    assert!(queue.is_empty());
    Ok(())
}

#[test]
fn mixed_adapters_share_one_element_type() -> Result<()> {
    let mut stack: Stack<String> = Stack::new();
    let mut queue: Queue<String> = Queue::new();
    for word in ["one", "two", "three"] {
        stack.push(word.to_string())?;
        queue.push(word.to_string())?;
    }
    assert_eq!(stack.pop().as_deref(), Some("three"));
    assert_eq!(queue.pop().as_deref(), Some("one"));
    Ok(())
}
