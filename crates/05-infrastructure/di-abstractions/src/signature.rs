//! 工厂签名解析
//!
//! 工厂通过 [`Signature`] 声明其依赖的组件名称，名称顺序即调用时的参数顺序。

use crate::factory::Factory;
use std::fmt;

/// 工厂签名
///
/// 按声明顺序排列的依赖名称列表。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    parameters: Vec<String>,
}

impl Signature {
    /// 使用显式声明的依赖名称创建签名
    pub fn new<I, S>(parameters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    /// 无依赖的签名
    pub fn empty() -> Self {
        Self::default()
    }

    /// 从参数列表声明文本中解析依赖名称
    ///
    /// 支持 `(a, b)`、`|a, b|`、`fn build(a: Arc<A>, mut b: Arc<B>) -> C` 以及不带分隔符的 `a, b`。
    /// 行注释与块注释会先被移除，因此声明中的说明文字不会被当作参数。
    ///
    /// ```
    /// use di_abstractions::Signature;
    ///
    /// let signature = Signature::parse("(config, /* 日志组件 */ logger) => {}");
    /// assert_eq!(signature.parameters(), ["config", "logger"]);
    /// ```
    pub fn parse(declaration: &str) -> Self {
        let stripped = strip_comments(declaration);
        let list = parameter_list(&stripped);

        let parameters = split_top_level(list)
            .into_iter()
            .flat_map(|segment| {
                // `name: Type` 只保留名称部分
                let binding = segment.split(':').next().unwrap_or_default();
                binding
                    .split_whitespace()
                    .filter(|token| *token != "mut")
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { parameters }
    }

    /// 依赖名称列表
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// 按顺序遍历依赖名称
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(String::as_str)
    }

    /// 依赖数量
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// 是否没有依赖
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// 取出依赖名称列表
    pub fn into_parameters(self) -> Vec<String> {
        self.parameters
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.parameters.join(", "))
    }
}

impl<const N: usize> From<[&str; N]> for Signature {
    fn from(parameters: [&str; N]) -> Self {
        Self::new(parameters)
    }
}

impl From<&[&str]> for Signature {
    fn from(parameters: &[&str]) -> Self {
        Self::new(parameters.iter().copied())
    }
}

impl From<Vec<String>> for Signature {
    fn from(parameters: Vec<String>) -> Self {
        Self { parameters }
    }
}

/// 提取工厂声明的依赖名称
pub fn extract_parameter_names<F>(factory: &F) -> Vec<String>
where
    F: Factory + ?Sized,
{
    factory.signature().into_parameters()
}

/// 移除声明文本中的 `//` 行注释与 `/* */` 块注释
///
/// 块注释不支持嵌套；未闭合的块注释一直延伸到文本末尾。
pub fn strip_comments(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    loop {
        let line = rest.find("//");
        let block = rest.find("/*");

        match (line, block) {
            (Some(l), b) if b.map_or(true, |b| l < b) => {
                output.push_str(&rest[..l]);
                rest = rest[l..].find('\n').map_or("", |end| &rest[l + end..]);
            }
            (_, Some(b)) => {
                output.push_str(&rest[..b]);
                let body = &rest[b + 2..];
                rest = body.find("*/").map_or("", |end| &body[end + 2..]);
                // 保持注释两侧的单词分隔
                output.push(' ');
            }
            _ => {
                output.push_str(rest);
                return output;
            }
        }
    }
}

/// 定位参数列表：取最先出现的 `(` 或 `|` 到同层闭合符之间的文本
fn parameter_list(text: &str) -> &str {
    let paren = text.find('(');
    let pipe = text.find('|');

    let (start, close) = match (paren, pipe) {
        (Some(p), Some(q)) if q < p => (q, '|'),
        (Some(p), _) => (p, ')'),
        (None, Some(q)) => (q, '|'),
        (None, None) => return text,
    };

    let body = &text[start + 1..];
    let mut nesting = Nesting::default();
    for (index, ch) in body.char_indices() {
        if ch == close && nesting.is_top_level() {
            return &body[..index];
        }
        nesting.step(ch);
    }
    body
}

/// 按顶层逗号切分，泛型、元组与函数类型中的逗号不切分
fn split_top_level(list: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut nesting = Nesting::default();
    let mut start = 0;

    for (index, ch) in list.char_indices() {
        if ch == ',' && nesting.is_top_level() {
            segments.push(&list[start..index]);
            start = index + 1;
        }
        nesting.step(ch);
    }
    segments.push(&list[start..]);
    segments
}

/// 括号嵌套深度，`->` 中的 `>` 不算闭合
#[derive(Default)]
struct Nesting {
    depth: usize,
    previous: Option<char>,
}

impl Nesting {
    fn is_top_level(&self) -> bool {
        self.depth == 0
    }

    fn step(&mut self, ch: char) {
        match ch {
            '<' | '(' | '[' => self.depth += 1,
            '>' if self.previous == Some('-') => {}
            '>' | ')' | ']' => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
        self.previous = Some(ch);
    }
}
