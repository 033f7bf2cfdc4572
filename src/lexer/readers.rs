//! Читатели отдельных конструкций для лексического анализатора
//!
//! Каждый читатель получает курсор по `&mut`, потребляет ровно одну конструкцию
//! и сообщает результат через [`ReadOutcome`]. Читатели ничего не накапливают
//! сами: токены и ошибки складывает главный цикл сканера.

use crate::lexer::cursor::Cursor;
use crate::lexer::error::LexError;
use crate::lexer::keywords::ReservedWords;
use crate::lexer::token::{Token, TokenType};

/// Результат работы одного читателя
#[derive(Debug, Clone, PartialEq)]
pub enum ReadOutcome {
    /// Распознан токен
    Token(Token),
    /// Пропущены пробелы или комментарий
    Skipped,
    /// Обнаружена лексическая ошибка
    Failed(LexError),
}

/// Класс следующей конструкции по первому символу (и второму, где нужно)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Whitespace,
    LineComment,
    BlockComment,
    Letter,
    Digit,
    Quote,
    /// Оператор или разделитель: вид токена и длина совпадения
    Symbol(TokenType, usize),
    /// Символ, с которого не начинается ни одна конструкция
    Invalid(char),
}

/// Двухсимвольные операторы проверяются раньше своих односимвольных префиксов
const TWO_CHAR_OPERATORS: [(char, char, TokenType); 4] = [
    ('<', '=', TokenType::LessEqual),
    ('>', '=', TokenType::GreaterEqual),
    ('!', '=', TokenType::NotEqual),
    ('=', '=', TokenType::Equal),
];

const SINGLE_CHAR_TOKENS: [(char, TokenType); 12] = [
    ('=', TokenType::Equal),
    ('<', TokenType::Less),
    ('>', TokenType::Greater),
    ('+', TokenType::Plus),
    ('-', TokenType::Minus),
    ('*', TokenType::Star),
    ('/', TokenType::Slash),
    ('(', TokenType::LeftParen),
    (')', TokenType::RightParen),
    (',', TokenType::Comma),
    (';', TokenType::Semicolon),
    ('.', TokenType::Dot),
];

pub fn is_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

pub fn is_identifier_part(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Определяет класс конструкции под курсором; `None` в конце текста
pub fn classify(cursor: &Cursor) -> Option<CharClass> {
    let ch = cursor.current()?;

    let class = match ch {
        c if is_whitespace(c) => CharClass::Whitespace,
        '-' if cursor.peek(1) == Some('-') => CharClass::LineComment,
        '#' if cursor.peek(1) == Some('#') => CharClass::BlockComment,
        c if is_identifier_start(c) => CharClass::Letter,
        c if c.is_ascii_digit() => CharClass::Digit,
        '\'' => CharClass::Quote,
        c => match match_operator(cursor) {
            Some((token_type, length)) => CharClass::Symbol(token_type, length),
            None => CharClass::Invalid(c),
        },
    };

    Some(class)
}

/// Ищет оператор или разделитель под курсором, предпочитая самое длинное совпадение
pub fn match_operator(cursor: &Cursor) -> Option<(TokenType, usize)> {
    let first = cursor.current()?;
    let second = cursor.peek(1);

    TWO_CHAR_OPERATORS
        .iter()
        .find(|(a, b, _)| *a == first && Some(*b) == second)
        .map(|(_, _, token_type)| (*token_type, 2))
        .or_else(|| {
            SINGLE_CHAR_TOKENS
                .iter()
                .find(|(c, _)| *c == first)
                .map(|(_, token_type)| (*token_type, 1))
        })
}

/// Пропускает пробельные символы
pub fn skip_whitespace(cursor: &mut Cursor) -> ReadOutcome {
    cursor.advance_while(is_whitespace);
    ReadOutcome::Skipped
}

/// Пропускает однострочный комментарий `--` до конца строки (перевод строки остается)
pub fn skip_line_comment(cursor: &mut Cursor) -> ReadOutcome {
    cursor.advance_while(|ch| ch != '\n');
    ReadOutcome::Skipped
}

/// Пропускает многострочный комментарий `## ... ##`
pub fn skip_block_comment(cursor: &mut Cursor) -> ReadOutcome {
    let start_position = cursor.position();

    // Пропускаем открывающие "##"
    cursor.advance();
    cursor.advance();

    while !cursor.is_at_end() {
        if cursor.starts_with("##") {
            cursor.advance();
            cursor.advance();
            return ReadOutcome::Skipped;
        }
        cursor.advance();
    }

    ReadOutcome::Failed(LexError::unclosed_comment(start_position))
}

/// Читает идентификатор или ключевое слово
///
/// Слово всегда читается целиком и только потом сверяется с таблицей,
/// так что `SELECTOR` остается одним идентификатором.
pub fn read_identifier_or_keyword(cursor: &mut Cursor, reserved: &ReservedWords) -> ReadOutcome {
    let start_position = cursor.position();
    cursor.advance_while(is_identifier_part);

    let value = cursor.slice_from(start_position.offset);
    let token_type = reserved.lookup(&value).unwrap_or(TokenType::Identifier);

    ReadOutcome::Token(Token::new(token_type, value, start_position))
}

/// Читает целое число или число с плавающей точкой
///
/// Точка входит в число только если за ней идет цифра: `1.` дает `1` и `.`.
pub fn read_number(cursor: &mut Cursor) -> ReadOutcome {
    let start_position = cursor.position();
    cursor.advance_while(|ch| ch.is_ascii_digit());

    let is_float = cursor.current() == Some('.')
        && cursor.peek(1).is_some_and(|ch| ch.is_ascii_digit());

    if is_float {
        cursor.advance();
        cursor.advance_while(|ch| ch.is_ascii_digit());
    }

    let token_type = if is_float {
        TokenType::FloatLiteral
    } else {
        TokenType::IntegerLiteral
    };

    ReadOutcome::Token(Token::new(
        token_type,
        cursor.slice_from(start_position.offset),
        start_position,
    ))
}

/// Читает строковый литерал в одинарных кавычках
///
/// Тело строки берется как есть, включая переводы строк. Лексема токена
/// содержит обе кавычки.
pub fn read_string(cursor: &mut Cursor) -> ReadOutcome {
    let start_position = cursor.position();

    // Открывающая кавычка
    cursor.advance();
    cursor.advance_while(|ch| ch != '\'');

    if cursor.advance().is_none() {
        return ReadOutcome::Failed(LexError::unclosed_string(start_position));
    }

    ReadOutcome::Token(Token::new(
        TokenType::StringLiteral,
        cursor.slice_from(start_position.offset),
        start_position,
    ))
}

/// Читает оператор или разделитель, найденный [`classify`]
pub fn read_operator(cursor: &mut Cursor, token_type: TokenType, length: usize) -> ReadOutcome {
    let start_position = cursor.position();
    for _ in 0..length {
        cursor.advance();
    }

    ReadOutcome::Token(Token::new(
        token_type,
        cursor.slice_from(start_position.offset),
        start_position,
    ))
}

/// Пропускает ровно один недопустимый символ и сообщает о нем
pub fn read_invalid(cursor: &mut Cursor, ch: char) -> ReadOutcome {
    let start_position = cursor.position();
    cursor.advance();
    ReadOutcome::Failed(LexError::invalid_character(ch, start_position))
}
