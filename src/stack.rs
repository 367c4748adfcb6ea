use crate::error::EvalError;

/// Operand stack shared by the evaluators. Lives for a single evaluation.
#[derive(Debug)]
pub(crate) struct Stack<T> {
    values: Vec<T>,
}

impl<T: Copy> Stack<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: T) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Result<T, EvalError> {
        self.values.pop().ok_or(EvalError::NotEnoughOperands)
    }

    /// Pop the two operands of a binary operator, as `(left, right)`
    pub fn pop_pair(&mut self) -> Result<(T, T), EvalError> {
        let right = self.pop()?;
        let left = self.pop()?;
        Ok((left, right))
    }

    /// Pop the `n` topmost values, in the order they were pushed
    pub fn pop_n(&mut self, n: usize) -> Result<Vec<T>, EvalError> {
        if self.values.len() < n {
            return Err(EvalError::NotEnoughOperands);
        }
        let at = self.values.len() - n;
        Ok(self.values.split_off(at))
    }

    /// The single value left once all the tokens are consumed
    pub fn finish(self) -> Result<T, EvalError> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::ExtraValues),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order() {
        let mut stack = Stack::with_capacity(4);
        for v in 1..=4 {
            stack.push(v);
        }
        assert_eq!(stack.pop_n(3), Ok(vec![2, 3, 4]));
        assert_eq!(stack.pop_n(2), Err(EvalError::NotEnoughOperands));
        stack.push(5);
        assert_eq!(stack.pop_pair(), Ok((1, 5)));
        assert_eq!(stack.pop(), Err(EvalError::NotEnoughOperands));
    }

    #[test]
    fn finish() {
        let stack: Stack<i64> = Stack::with_capacity(0);
        assert_eq!(stack.finish(), Err(EvalError::ExtraValues));

        let mut stack = Stack::with_capacity(2);
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.finish(), Err(EvalError::ExtraValues));

        let mut stack = Stack::with_capacity(1);
        stack.push(7);
        assert_eq!(stack.finish(), Ok(7));
    }
}
