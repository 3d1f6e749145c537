use lifo_stack::{Error, FixedStack};

// This example evaluates postfix arithmetic on a fixed-size operand stack. One
// stack is reused across expressions; an expression that needs more operand
// slots than the stack has surfaces as CapacityExceeded, and one with missing
// operands as EmptyStack.
fn eval(expr: &str, operands: &mut FixedStack<f64>) -> Result<f64, Error> {
    operands.clear();
    for token in expr.split_whitespace() {
        match token {
            "+" | "-" | "*" | "/" => {
                let rhs = operands.pop()?;
                let lhs = operands.pop()?;
                let value = match token {
                    "+" => lhs + rhs,
                    "-" => lhs - rhs,
                    "*" => lhs * rhs,
                    _ => lhs / rhs,
                };
                operands.push(value)?;
            }
            number => operands.push(number.parse().expect("expected a number"))?,
        }
    }
    operands.pop()
}

fn main() {
    let mut operands = FixedStack::new(4);
    let expressions = [
        "3 4 + 2 *",
        "10 2 2 * -",
        // Five pending operands, one more than the stack holds.
        "1 2 3 4 5 + + + +",
        // Missing an operand.
        "1 +",
    ];
    for expr in expressions {
        match eval(expr, &mut operands) {
            Ok(value) => eprintln!("{expr} = {value}"),
            Err(err) => eprintln!("{expr}: {err}"),
        }
    }
}
