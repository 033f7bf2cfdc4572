//! Тесты для лексического анализатора
//!
//! Курсор, отдельные читатели, главный цикл и свойства на случайных входах.
