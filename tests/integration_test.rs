// Integration tests for the syntax checker

use pascheck::{check, CheckerConfig, Dialect, Recovery, Stream, SyntaxError, TokenKind, Trace};

fn insert_recovery() -> CheckerConfig {
    CheckerConfig::default().with_recovery(Recovery::Insert)
}

#[test]
fn test_minimal_program_is_clean() {
    let transcript = check("program p; begin x := 1 end.", CheckerConfig::default());

    assert!(transcript.is_clean(), "{:?}", transcript.get_output());
    assert_eq!(
        transcript.stream_output(Stream::Stdout),
        vec![
            "Parsing BEGIN",
            "Parsing command with token: IDENTIFIER",
            "Parsing assignment",
            "Parsing expression",
            "Parsing END",
        ]
    );
}

#[test]
fn test_missing_assign_with_insert_recovery() {
    let transcript = check("program p; begin x 1 end.", insert_recovery());

    assert_eq!(
        transcript.stream_output(Stream::Stderr),
        vec!["Erro de Sintaxe: esperado ASSIGN mas recebeu NUM_INTEGER"]
    );
    // Checking carried on through the expression and reached `end`
    assert_eq!(
        transcript.get_output(),
        vec![
            "Parsing BEGIN",
            "Parsing command with token: IDENTIFIER",
            "Parsing assignment",
            "Erro de Sintaxe: esperado ASSIGN mas recebeu NUM_INTEGER",
            "Parsing expression",
            "Parsing END",
        ]
    );
}

#[test]
fn test_missing_assign_cascades_with_swallow_recovery() {
    let transcript = check("program p; begin x 1 end.", CheckerConfig::default());

    assert_eq!(
        transcript.get_output(),
        vec![
            "Parsing BEGIN",
            "Parsing command with token: IDENTIFIER",
            "Parsing assignment",
            "Erro de Sintaxe: esperado ASSIGN mas recebeu NUM_INTEGER",
            "Parsing expression",
            "Erro de Sintaxe: Esperado UNKNOWN mas recebeu END",
            "Erro de Sintaxe: esperado END mas recebeu DOT",
            "Parsing END",
            "Erro de Sintaxe: esperado DOT mas recebeu END_OF_FILE",
        ]
    );
}

#[test]
fn test_empty_input() {
    for recovery in [Recovery::Swallow, Recovery::Insert] {
        let transcript = check("", CheckerConfig::default().with_recovery(recovery));
        assert_eq!(
            transcript.get_output(),
            vec!["Erro de Sintaxe: esperado PROGRAM mas recebeu END_OF_FILE"]
        );
    }
}

#[test]
fn test_garbage_terminates() {
    let transcript = check("@@@@", CheckerConfig::default());
    assert_eq!(
        transcript.get_output(),
        vec!["Erro de Sintaxe: esperado PROGRAM mas recebeu ERROR"]
    );

    let transcript = check("program @@@@", CheckerConfig::default());
    assert!(!transcript.is_clean());

    let transcript = check("program p; begin @@@@ end.", insert_recovery());
    assert!(!transcript.is_clean());
}

#[test]
fn test_legacy_dialect_reproduces_narrow_keywords() {
    // Only `program` is reserved, so `begin` is an identifier
    let transcript = check(
        "program p; begin x := 1 end.",
        CheckerConfig::default().with_dialect(Dialect::Legacy),
    );

    assert_eq!(
        transcript.diagnostics().next(),
        Some(&SyntaxError::Expected {
            expected: TokenKind::Begin,
            found: TokenKind::Identifier,
        })
    );
}

#[test]
fn test_full_program() {
    let source = r#"
        program sums;
        var i, total, limit: integer;
        begin
            i := 0;
            total := 0;
            limit := 10;
            while i < limit do
            begin
                i := i + 1;
                if not (i = 5) then
                    total := total + i * 2
                else
                    total := -total
            end
        end.
    "#;

    let transcript = check(source, CheckerConfig::default());
    assert!(transcript.is_clean(), "{:?}", transcript.get_output());
    assert_eq!(transcript.traces().filter(|t| **t == Trace::Assignment).count(), 6);
}

#[test]
fn test_relational_pair_needs_extended_dialect() {
    let source = "program p; begin if a <= b then a := b end.";

    let standard = check(source, CheckerConfig::default());
    assert!(standard
        .diagnostics()
        .any(|err| *err == SyntaxError::Expected { expected: TokenKind::Then, found: TokenKind::Error }));

    let extended = check(source, CheckerConfig::default().with_dialect(Dialect::Extended));
    assert!(extended.is_clean(), "{:?}", extended.get_output());
}

#[test]
fn test_independent_checks_on_threads() {
    let sources = [
        "program a; begin x := 1 end.",
        "program b; begin x 1 end.",
        "",
    ];

    let handles: Vec<_> = sources
        .iter()
        .map(|src| {
            let src = src.to_string();
            std::thread::spawn(move || check(&src, CheckerConfig::default()).error_count())
        })
        .collect();
    let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(counts, vec![0, 4, 1]);
}
