use alloc::string::String;
use alloc::vec::Vec;

use crate::error::{CollectionError, Result};

/// An array-backed LIFO stack. The top is the end of the buffer, so push
/// and pop are O(1).
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty stack.
    pub const fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Returns `true` if the stack has no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Places `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        self.items.pop().ok_or(CollectionError::EmptyCollection)
    }

    /// Returns the top item without removing it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCollection` if the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.items.last().ok_or(CollectionError::EmptyCollection)
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Checks that every paired symbol in `input` closes in the right order.
///
/// Openers are pushed; each closer must match the most recent unmatched
/// opener. Quotes pair with themselves: a quote closes an identical quote
/// on top of the stack and opens otherwise, so quoted runs must nest.
/// Characters outside `()`, `{}`, `[]`, `'`, and `"` are ignored.
pub fn is_balanced(input: &str) -> bool {
    let mut openers = Stack::new();
    for symbol in input.chars() {
        match symbol {
            '(' | '{' | '[' => openers.push(symbol),
            ')' | '}' | ']' => match openers.pop() {
                Ok(opener) if closer_for(opener) == symbol => {}
                _ => return false,
            },
            '\'' | '"' => {
                if openers.peek() == Ok(&symbol) {
                    let _ = openers.pop();
                } else {
                    openers.push(symbol);
                }
            }
            _ => {}
        }
    }
    openers.is_empty()
}

fn closer_for(opener: char) -> char {
    match opener {
        '(' => ')',
        '{' => '}',
        _ => ']',
    }
}

/// Renders `n` in `base` by repeatedly dividing and stacking remainders,
/// then popping them most significant first.
///
/// # Panics
///
/// Panics if `base` is outside `2..=16`.
pub fn to_base(mut n: u64, base: u32) -> String {
    const DIGITS: &[u8] = b"0123456789abcdef";
    assert!((2..=16).contains(&base), "base must be within 2..=16");
    let base = u64::from(base);
    if n == 0 {
        return String::from("0");
    }
    let mut remainders = Stack::new();
    while n > 0 {
        remainders.push((n % base) as usize);
        n /= base;
    }
    let mut rendered = String::new();
    while let Ok(remainder) = remainders.pop() {
        rendered.push(DIGITS[remainder] as char);
    }
    rendered
}
