//! The sample program every new project starts with.
//!
//! Ten Fibonacci numbers, written in Kochanowski. The text is data: nothing
//! here parses or runs it.

/// File name of the sample program, relative to the project root.
pub const SAMPLE_FILE_NAME: &str = "indeks.kpl";

/// Sample program text. No trailing newline.
pub const SAMPLE_SOURCE: &str = "\
Spłódź zmienną pierwsza liczba o wartości równej 1.
Spłódź zmienną druga liczba o wartości równej 0.
Spłódź zmienną trzecia liczba o wartości równej 0.

Powtórz przez 10 powtórzeń następujące polecenia.

Zmiennej trzecia liczba przypisz pierwsza liczba dodać druga liczba.
Zmiennej pierwsza liczba przypisz druga liczba.
Zmiennej druga liczba przypisz trzecia liczba.

Drukuj druga liczba.

Przejdź do następnej iteracji.";
