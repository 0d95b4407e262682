use crate::objects::Value;
use crate::virtual_machine::{RuntimeResult, VirtualMachine};

impl VirtualMachine {
    /// Adds the two values on top of the stack. Two strings concatenate into
    /// a freshly allocated string object adopted by the heap; two numbers
    /// add as doubles; anything else is a runtime error.
    pub(super) fn perform_addition(&mut self) -> RuntimeResult {
        let val2 = self.pop_stack();
        let val1 = self.pop_stack();

        if val1.is_string() && val2.is_string() {
            let s1 = val1.as_string().unwrap();
            let s2 = val2.as_string().unwrap();

            let mut chars = String::with_capacity(s1.len() + s2.len());
            chars.push_str(s1);
            chars.push_str(s2);

            let result = self.heap.take_string(chars);
            self.push_stack(result);

            RuntimeResult::Continue
        } else if val1.is_number() && val2.is_number() {
            let v1 = val1.as_number().unwrap();
            let v2 = val2.as_number().unwrap();
            self.push_stack(Value::Number(v1 + v2));

            RuntimeResult::Continue
        } else {
            RuntimeResult::Error {
                message: String::from("Operands for operator+ must be numbers."),
            }
        }
    }

    /// Subtracts the two values on top of the stack.
    pub(super) fn perform_subtraction(&mut self) -> RuntimeResult {
        match self.pop_number_operands("-") {
            Ok((v1, v2)) => {
                self.push_stack(Value::Number(v1 - v2));
                RuntimeResult::Continue
            }
            Err(error) => error,
        }
    }

    /// Multiplies the two values on top of the stack.
    pub(super) fn perform_multiplication(&mut self) -> RuntimeResult {
        match self.pop_number_operands("*") {
            Ok((v1, v2)) => {
                self.push_stack(Value::Number(v1 * v2));
                RuntimeResult::Continue
            }
            Err(error) => error,
        }
    }

    /// Divides the two values on top of the stack. Division follows the
    /// IEEE-754 rules, so dividing by zero yields an infinity.
    pub(super) fn perform_division(&mut self) -> RuntimeResult {
        match self.pop_number_operands("/") {
            Ok((v1, v2)) => {
                self.push_stack(Value::Number(v1 / v2));
                RuntimeResult::Continue
            }
            Err(error) => error,
        }
    }

    /// Compares the two values on top of the stack with `>`.
    pub(super) fn perform_greater_than(&mut self) -> RuntimeResult {
        match self.pop_number_operands(">") {
            Ok((v1, v2)) => {
                self.push_stack(Value::Bool(v1 > v2));
                RuntimeResult::Continue
            }
            Err(error) => error,
        }
    }

    /// Compares the two values on top of the stack with `<`.
    pub(super) fn perform_less_than(&mut self) -> RuntimeResult {
        match self.pop_number_operands("<") {
            Ok((v1, v2)) => {
                self.push_stack(Value::Bool(v1 < v2));
                RuntimeResult::Continue
            }
            Err(error) => error,
        }
    }

    /// Negates the number on top of the stack in place.
    pub(super) fn perform_negation(&mut self) -> RuntimeResult {
        if !self.peek_stack(0).is_number() {
            return RuntimeResult::Error {
                message: String::from("Operand to operator- must be a number."),
            };
        }

        let val = self.pop_stack();
        self.push_stack(Value::Number(-val.as_number().unwrap()));

        RuntimeResult::Continue
    }

    /// Pops the two operands of a numeric operator off the stack, checking
    /// that both are numbers.
    ///
    /// ## Arguments
    /// * `operator` – The operator's symbol, used in the error message when
    /// an operand is not a number.
    fn pop_number_operands(&mut self, operator: &str) -> Result<(f64, f64), RuntimeResult> {
        let val2 = self.pop_stack();
        let val1 = self.pop_stack();

        if !val1.is_number() || !val2.is_number() {
            return Err(RuntimeResult::Error {
                message: format!("Operands for operator{} must be numbers.", operator),
            });
        }

        Ok((val1.as_number().unwrap(), val2.as_number().unwrap()))
    }
}
