//! Built-in digraphs, laid out like the editor's `:digraphs` listing.

/// `<chars> <glyph> <decimal code>` triples, several per line.
pub const LISTING: &str = "\
!I ¡  161  Ct ¢  162  Pd £  163  Eu €  8364  Ye ¥  165
SE §  167  Co ©  169  -a ª  170  << «  171  Rg ®  174  DG °  176
+- ±  177  2S ²  178  3S ³  179  My µ  181  PI ¶  182  .M ·  183
>> »  187  14 ¼  188  12 ½  189  34 ¾  190  ?I ¿  191
A! À  192  A' Á  193  A> Â  194  A? Ã  195  A: Ä  196  AA Å  197
AE Æ  198  C, Ç  199  E! È  200  E' É  201  E> Ê  202  E: Ë  203
I! Ì  204  I' Í  205  I> Î  206  I: Ï  207  N? Ñ  209  O! Ò  210
O' Ó  211  O> Ô  212  O? Õ  213  O: Ö  214  *X ×  215  O/ Ø  216
U! Ù  217  U' Ú  218  U> Û  219  U: Ü  220  Y' Ý  221  ss ß  223
a! à  224  a' á  225  a> â  226  a? ã  227  a: ä  228  aa å  229
ae æ  230  c, ç  231  e! è  232  e' é  233  e> ê  234  e: ë  235
i! ì  236  i' í  237  i> î  238  i: ï  239  n? ñ  241  o! ò  242
o' ó  243  o> ô  244  o? õ  245  o: ö  246  -: ÷  247  o/ ø  248
u! ù  249  u' ú  250  u> û  251  u: ü  252  y' ý  253  y: ÿ  255
a* α  945  b* β  946  g* γ  947  d* δ  948  e* ε  949  l* λ  955
m* μ  956  p* π  960  s* σ  963  w* ω  969  OK ✓  10003  XX ✗  10007
";
