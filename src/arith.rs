use simple_stream::Integer;

/// 单步整数运算，溢出时按补码回绕。
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum Arith {
    Add(Integer),
    Sub(Integer),
    Mul(Integer),
    /// 除数非零，由解析保证
    Div(Integer),
    /// 除数非零，由解析保证
    Rem(Integer),
    Pow(u32),
}

impl Arith {
    pub(crate) fn apply(&self, x: Integer) -> Integer {
        match *self {
            Arith::Add(n) => x.wrapping_add(n),
            Arith::Sub(n) => x.wrapping_sub(n),
            Arith::Mul(n) => x.wrapping_mul(n),
            Arith::Div(n) => x.wrapping_div(n),
            Arith::Rem(n) => x.wrapping_rem(n),
            Arith::Pow(n) => x.wrapping_pow(n),
        }
    }
}
